//! Application layer for labnote.
//!
//! The app layer coordinates the trial store and domain logic.
//! It does not run experiment code and it does not own a terminal; reports
//! go to whatever sink the caller hands in.

mod listing;
mod purge;
mod summarize;

pub use listing::ListingUseCase;
pub use purge::PurgeUseCase;
pub use summarize::{SummarizeUseCase, SummaryOutcome};

use anyhow::Context;
use labnote_adapters::TrialStore;
use labnote_domain::{ExperimentRegistry, TrialOutcome, classify, record_trial, values_equal};
use labnote_types::{Category, ReportConfig};
use serde_json::Value;
use std::path::Path;
use time::OffsetDateTime;
use tracing::debug;

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Report settings from `path`, or the defaults when no file is given or
/// the file does not exist.
pub fn report_config(path: Option<&Path>) -> anyhow::Result<ReportConfig> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    let config = labnote_config::load_config_or_default(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    Ok(config.report)
}

#[derive(Debug, Clone)]
pub struct RecordTrialRequest {
    pub experiment: String,
    pub outcome: TrialOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTrialOutcome {
    /// Id the store assigned.
    pub id: u64,

    pub category: Category,

    /// 1-based run number within the experiment.
    pub run: u64,
}

/// Turns observations into a stored trial and keeps the experiment's run
/// count and tally in step with the store.
pub struct RecordTrialUseCase<'a, S: TrialStore, C: Clock> {
    store: &'a mut S,
    registry: &'a mut ExperimentRegistry,
    clock: C,
}

impl<'a, S: TrialStore, C: Clock> RecordTrialUseCase<'a, S, C> {
    pub fn new(store: &'a mut S, registry: &'a mut ExperimentRegistry, clock: C) -> Self {
        Self {
            store,
            registry,
            clock,
        }
    }

    /// Record with structural equality as the comparator.
    pub fn execute(&mut self, req: RecordTrialRequest) -> anyhow::Result<RecordTrialOutcome> {
        self.execute_with(req, values_equal)
    }

    pub fn execute_with<F>(
        &mut self,
        req: RecordTrialRequest,
        compare: F,
    ) -> anyhow::Result<RecordTrialOutcome>
    where
        F: Fn(&Value, &Value) -> bool,
    {
        let run = self.registry.named(&req.experiment).begin_run();

        let record = record_trial(&req.experiment, self.clock.now(), req.outcome, compare);
        let category = classify(&record);

        let id = self
            .store
            .insert(record)
            .with_context(|| format!("failed to store trial for experiment {:?}", req.experiment))?;

        self.registry.named(&req.experiment).count(category);
        debug!(
            experiment = %req.experiment,
            id,
            run,
            category = category.as_str(),
            "recorded trial"
        );

        Ok(RecordTrialOutcome { id, category, run })
    }
}
