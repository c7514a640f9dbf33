use crate::classify::classify;
use labnote_types::{
    Category, ClassificationCounts, ExperimentSnapshot, SNAPSHOT_SCHEMA_V1, TrialRecord,
};

/// Aggregate an experiment's trials into the read the report consumes.
///
/// Counts, time span and timing pairs all come from the same pass over
/// `records`, so they always describe the same trial set. Timing pairs are
/// taken from correct trials only.
pub fn snapshot_of<'a, I>(experiment: &str, records: I) -> ExperimentSnapshot
where
    I: IntoIterator<Item = &'a TrialRecord>,
{
    let mut counts = ClassificationCounts::default();
    let mut earliest = None;
    let mut latest = None;
    let mut timings = Vec::new();

    for rec in records {
        let category = classify(rec);
        counts.record(category);

        if earliest.is_none_or(|t| rec.created_at < t) {
            earliest = Some(rec.created_at);
        }
        if latest.is_none_or(|t| rec.created_at > t) {
            latest = Some(rec.created_at);
        }

        if category == Category::Correct {
            timings.push(rec.timing());
        }
    }

    ExperimentSnapshot {
        schema: SNAPSHOT_SCHEMA_V1.to_string(),
        experiment: experiment.to_string(),
        counts,
        earliest,
        latest,
        timings,
    }
}
