use anyhow::Context;
use labnote_adapters::TrialStore;
use labnote_domain::TimingSeries;
use labnote_render::{SummaryInput, render_summary};
use labnote_types::{ClassificationCounts, ReportConfig};
use std::io::Write;
use tracing::debug;

/// What was written, for callers that want to act on the numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub counts: ClassificationCounts,
    pub time_deltas: usize,
    pub speedup_factors: usize,
}

/// Renders one experiment's summary from a single store snapshot.
pub struct SummarizeUseCase<'a, S: TrialStore> {
    store: &'a S,
    config: ReportConfig,
}

impl<'a, S: TrialStore> SummarizeUseCase<'a, S> {
    pub fn new(store: &'a S, config: ReportConfig) -> Self {
        Self { store, config }
    }

    /// Render the summary as a string.
    pub fn render(&self, experiment: &str) -> anyhow::Result<String> {
        self.render_with_outcome(experiment).map(|(text, _)| text)
    }

    /// Write the summary verbatim to `sink`.
    pub fn execute<W: Write>(&self, experiment: &str, sink: &mut W) -> anyhow::Result<SummaryOutcome> {
        let (text, outcome) = self.render_with_outcome(experiment)?;
        sink.write_all(text.as_bytes())
            .with_context(|| format!("failed to write summary for experiment {experiment:?}"))?;
        Ok(outcome)
    }

    fn render_with_outcome(&self, experiment: &str) -> anyhow::Result<(String, SummaryOutcome)> {
        let snapshot = self
            .store
            .snapshot(experiment)
            .with_context(|| format!("failed to read trials for experiment {experiment:?}"))?;

        let series = TimingSeries::from_pairs(&snapshot.timings);
        debug!(
            experiment,
            total = snapshot.counts.total,
            time_deltas = series.time_deltas.len(),
            speedup_factors = series.speedup_factors.len(),
            "summarizing experiment"
        );

        let input = SummaryInput {
            experiment: &snapshot.experiment,
            span: snapshot.earliest.zip(snapshot.latest),
            counts: snapshot.counts,
            time_deltas: &series.time_deltas,
            speedup_factors: &series.speedup_factors,
        };
        let text = render_summary(&input, &self.config)
            .with_context(|| format!("failed to render summary for experiment {experiment:?}"))?;

        let outcome = SummaryOutcome {
            counts: snapshot.counts,
            time_deltas: series.time_deltas.len(),
            speedup_factors: series.speedup_factors.len(),
        };
        Ok((text, outcome))
    }
}
