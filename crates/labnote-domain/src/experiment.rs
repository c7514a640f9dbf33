use crate::classify::classify;
use labnote_types::{Category, ClassificationCounts, TrialRecord};
use std::collections::BTreeMap;

/// Per-experiment bookkeeping: how many runs were started and how the
/// recorded trials split across categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experiment {
    name: String,
    run_count: u64,
    tally: ClassificationCounts,
}

impl Experiment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run_count: 0,
            tally: ClassificationCounts::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run_count(&self) -> u64 {
        self.run_count
    }

    pub fn tally(&self) -> &ClassificationCounts {
        &self.tally
    }

    /// Start a new run; returns the 1-based run number.
    pub fn begin_run(&mut self) -> u64 {
        self.run_count += 1;
        self.run_count
    }

    /// Count a finished trial exactly once.
    pub fn record(&mut self, trial: &TrialRecord) -> Category {
        let category = classify(trial);
        self.count(category);
        category
    }

    /// Count a trial that was already classified.
    pub fn count(&mut self, category: Category) {
        self.tally.record(category);
    }

    pub fn reset_tally(&mut self) {
        self.tally = ClassificationCounts::default();
    }
}

/// Experiments keyed by name, created on first use.
#[derive(Debug, Clone, Default)]
pub struct ExperimentRegistry {
    experiments: BTreeMap<String, Experiment>,
}

impl ExperimentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(&mut self, name: &str) -> &mut Experiment {
        self.experiments
            .entry(name.to_string())
            .or_insert_with(|| Experiment::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&Experiment> {
        self.experiments.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.experiments.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TrialOutcome, record_trial, values_equal};
    use labnote_types::{CONTROL_NAME, ExceptionInfo, Observation};
    use serde_json::json;
    use time::macros::datetime;

    fn trial(candidate: Observation) -> TrialRecord {
        record_trial(
            "wibble",
            datetime!(2024-01-01 00:00:00 UTC),
            TrialOutcome {
                control: Observation::returned(CONTROL_NAME, 1.0, json!(1)),
                candidates: vec![candidate],
                context: None,
            },
            values_equal,
        )
    }

    #[test]
    fn begin_run_counts_from_one() {
        let mut exp = Experiment::new("wibble");
        assert_eq!(exp.run_count(), 0);
        assert_eq!(exp.begin_run(), 1);
        assert_eq!(exp.begin_run(), 2);
        assert_eq!(exp.run_count(), 2);
    }

    #[test]
    fn record_increments_exactly_one_bucket() {
        let mut exp = Experiment::new("wibble");
        assert_eq!(
            exp.record(&trial(Observation::returned("c", 1.0, json!(1)))),
            Category::Correct
        );
        assert_eq!(
            exp.record(&trial(Observation::raised("c", 1.0, ExceptionInfo::timeout("slow")))),
            Category::TimedOut
        );

        let tally = exp.tally();
        assert_eq!(tally.total, 2);
        assert_eq!(tally.correct, 1);
        assert_eq!(tally.timed_out, 1);
        assert_eq!(tally.other_error, 0);
        assert!(tally.is_consistent());

        exp.reset_tally();
        assert!(exp.tally().is_empty());
    }

    #[test]
    fn registry_creates_on_first_use_and_keeps_state() {
        let mut registry = ExperimentRegistry::new();
        assert!(registry.get("b").is_none());

        registry.named("b").begin_run();
        registry.named("a");
        registry.named("b").begin_run();

        assert_eq!(registry.get("b").map(Experiment::run_count), Some(2));
        assert_eq!(registry.get("a").map(Experiment::name), Some("a"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
