use labnote_stats::Speedup;
use labnote_types::{Observation, TRIAL_SCHEMA_V1, TrialRecord};
use serde_json::Value;
use time::OffsetDateTime;

static NULL: Value = Value::Null;

/// Everything the harness observed for one trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    pub control: Observation,
    pub candidates: Vec<Observation>,
    pub context: Option<Value>,
}

/// Default value comparator: structural JSON equality.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    a == b
}

/// Two observations agree when neither raised and the comparator accepts
/// their values, or when both raised the same exception.
pub fn equivalent<F>(control: &Observation, candidate: &Observation, compare: &F) -> bool
where
    F: Fn(&Value, &Value) -> bool,
{
    match (&control.exception, &candidate.exception) {
        (None, None) => compare(
            control.value.as_ref().unwrap_or(&NULL),
            candidate.value.as_ref().unwrap_or(&NULL),
        ),
        (Some(a), Some(b)) => a.type_name == b.type_name && a.message == b.message,
        _ => false,
    }
}

/// Build the persisted record for one trial.
///
/// `id` is left at zero; the store assigns it on insert. Timing columns are
/// only filled for single-candidate trials, since a delta against several
/// candidates has no single meaning.
pub fn record_trial<F>(
    experiment: &str,
    created_at: OffsetDateTime,
    outcome: TrialOutcome,
    compare: F,
) -> TrialRecord
where
    F: Fn(&Value, &Value) -> bool,
{
    let TrialOutcome {
        control,
        candidates,
        context,
    } = outcome;

    let equivalent = candidates
        .iter()
        .all(|cand| equivalent(&control, cand, &compare));
    let raised_error = !control.raised_error() && candidates.iter().any(Observation::raised_error);
    let timed_out = raised_error && candidates.iter().any(Observation::timed_out);

    let (control_duration, candidate_duration, speedup) = match candidates.as_slice() {
        [only] => {
            let s = Speedup::new(control.duration, only.duration, None, None);
            (control.duration, only.duration, s)
        }
        _ => (None, None, Speedup::default()),
    };

    TrialRecord {
        schema: TRIAL_SCHEMA_V1.to_string(),
        id: 0,
        experiment: experiment.to_string(),
        created_at,
        equivalent,
        raised_error,
        timed_out,
        control_duration,
        candidate_duration,
        time_delta: speedup.time(),
        speedup_factor: speedup.factor(),
        control,
        candidates,
        context,
    }
}
