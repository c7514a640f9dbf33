//! Trial storage adapters for labnote.
//!
//! In clean-arch terms: this is where trials live between runs. The core
//! only ever sees an [`ExperimentSnapshot`], so any store that can produce
//! one consistent read per experiment can back the report.

use labnote_domain::{classify, snapshot_of};
use labnote_types::{Category, ExperimentSnapshot, TRIAL_SCHEMA_V1, TrialRecord};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("unsupported trial schema {found:?}")]
    SchemaMismatch { found: String },

    #[error("trial for experiment {experiment:?} is timed out but not raised")]
    InconsistentFlags { experiment: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// What a purge removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeSummary {
    pub trials: usize,
    pub observations: usize,
}

pub trait TrialStore {
    /// Persist a trial and return the id assigned to it.
    fn insert(&mut self, record: TrialRecord) -> Result<u64, AdapterError>;

    /// One consistent read of counts, time span and correct-trial timings.
    fn snapshot(&self, experiment: &str) -> Result<ExperimentSnapshot, AdapterError>;

    /// Trials of one experiment in insertion order, optionally filtered by
    /// category and capped at `limit`.
    fn records(
        &self,
        experiment: &str,
        category: Option<Category>,
        limit: Option<usize>,
    ) -> Result<Vec<TrialRecord>, AdapterError>;

    /// Drop every trial of an experiment.
    fn purge(&mut self, experiment: &str) -> Result<PurgeSummary, AdapterError>;
}

/// Process-local store keyed by experiment name.
///
/// Ids are assigned from a single counter shared by all experiments, so they
/// stay unique across the whole store.
#[derive(Debug, Default, Clone)]
pub struct MemoryTrialStore {
    next_id: u64,
    trials: BTreeMap<String, Vec<TrialRecord>>,
}

impl MemoryTrialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.trials.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn experiment(&self, name: &str) -> &[TrialRecord] {
        self.trials.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

impl TrialStore for MemoryTrialStore {
    fn insert(&mut self, mut record: TrialRecord) -> Result<u64, AdapterError> {
        if record.schema != TRIAL_SCHEMA_V1 {
            return Err(AdapterError::SchemaMismatch {
                found: record.schema,
            });
        }
        if record.timed_out && !record.raised_error {
            return Err(AdapterError::InconsistentFlags {
                experiment: record.experiment,
            });
        }

        self.next_id += 1;
        record.id = self.next_id;
        debug!(experiment = %record.experiment, id = record.id, "stored trial");

        self.trials
            .entry(record.experiment.clone())
            .or_default()
            .push(record);
        Ok(self.next_id)
    }

    fn snapshot(&self, experiment: &str) -> Result<ExperimentSnapshot, AdapterError> {
        Ok(snapshot_of(experiment, self.experiment(experiment)))
    }

    fn records(
        &self,
        experiment: &str,
        category: Option<Category>,
        limit: Option<usize>,
    ) -> Result<Vec<TrialRecord>, AdapterError> {
        Ok(self
            .experiment(experiment)
            .iter()
            .filter(|r| category.is_none_or(|c| classify(r) == c))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    fn purge(&mut self, experiment: &str) -> Result<PurgeSummary, AdapterError> {
        let removed = self.trials.remove(experiment).unwrap_or_default();
        let summary = PurgeSummary {
            trials: removed.len(),
            observations: removed.iter().map(|r| 1 + r.candidates.len()).sum(),
        };
        debug!(
            experiment,
            trials = summary.trials,
            observations = summary.observations,
            "purged experiment"
        );
        Ok(summary)
    }
}
