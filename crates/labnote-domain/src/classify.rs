use labnote_types::{Category, ClassificationCounts, TrialRecord};

/// Bucket a finished trial.
///
/// The harness never records a trial as both equivalent and raised, since a
/// raising candidate cannot be equivalent to a control that returned. That
/// combination is not re-checked here and falls into the raised rows.
pub fn classify(trial: &TrialRecord) -> Category {
    classify_flags(trial.equivalent, trial.raised_error, trial.timed_out)
}

pub fn classify_flags(equivalent: bool, raised_error: bool, timed_out: bool) -> Category {
    match (equivalent, raised_error, timed_out) {
        (true, false, _) => Category::Correct,
        (false, false, _) => Category::Mismatched,
        (_, true, true) => Category::TimedOut,
        (_, true, false) => Category::OtherError,
    }
}

/// Classify every trial once and count the buckets.
pub fn tally<'a, I>(trials: I) -> ClassificationCounts
where
    I: IntoIterator<Item = &'a TrialRecord>,
{
    let mut counts = ClassificationCounts::default();
    for trial in trials {
        counts.record(classify(trial));
    }
    counts
}
