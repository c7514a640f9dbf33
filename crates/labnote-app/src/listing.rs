use anyhow::Context;
use labnote_adapters::TrialStore;
use labnote_render::{render_error_listing, render_mismatch_listing};
use labnote_types::Category;
use std::io::Write;

/// Per-trial listings of what went wrong in an experiment.
pub struct ListingUseCase<'a, S: TrialStore> {
    store: &'a S,
}

impl<'a, S: TrialStore> ListingUseCase<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Write control and candidate values of mismatched trials. Returns the
    /// number of trials listed; nothing is written when there are none.
    pub fn mismatches<W: Write>(
        &self,
        experiment: &str,
        limit: Option<usize>,
        sink: &mut W,
    ) -> anyhow::Result<usize> {
        self.list(experiment, Category::Mismatched, limit, sink, render_mismatch_listing)
    }

    /// Write exception rows for trials that raised something other than a
    /// timeout.
    pub fn errors<W: Write>(
        &self,
        experiment: &str,
        limit: Option<usize>,
        sink: &mut W,
    ) -> anyhow::Result<usize> {
        self.list(experiment, Category::OtherError, limit, sink, render_error_listing)
    }

    fn list<W, R>(
        &self,
        experiment: &str,
        category: Category,
        limit: Option<usize>,
        sink: &mut W,
        render: R,
    ) -> anyhow::Result<usize>
    where
        W: Write,
        R: Fn(&str, &[labnote_types::TrialRecord]) -> String,
    {
        let trials = self
            .store
            .records(experiment, Some(category), limit)
            .with_context(|| {
                format!(
                    "failed to read {} trials for experiment {experiment:?}",
                    category.label()
                )
            })?;

        sink.write_all(render(experiment, &trials).as_bytes())
            .with_context(|| format!("failed to write listing for experiment {experiment:?}"))?;
        Ok(trials.len())
    }
}
