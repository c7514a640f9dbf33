use anyhow::Context;
use labnote_adapters::{PurgeSummary, TrialStore};
use labnote_domain::ExperimentRegistry;
use tracing::info;

/// Drops an experiment's trials and resets its tally.
pub struct PurgeUseCase<'a, S: TrialStore> {
    store: &'a mut S,
    registry: &'a mut ExperimentRegistry,
}

impl<'a, S: TrialStore> PurgeUseCase<'a, S> {
    pub fn new(store: &'a mut S, registry: &'a mut ExperimentRegistry) -> Self {
        Self { store, registry }
    }

    pub fn execute(&mut self, experiment: &str) -> anyhow::Result<PurgeSummary> {
        let summary = self
            .store
            .purge(experiment)
            .with_context(|| format!("failed to purge experiment {experiment:?}"))?;
        self.registry.named(experiment).reset_tally();

        info!(
            experiment,
            "deleted {} trial(s) and {} observations", summary.trials, summary.observations
        );
        Ok(summary)
    }
}
