//! Domain logic for labnote.
//!
//! This crate is intentionally I/O-free: it classifies trials, turns raw
//! observations into trial records, and aggregates records into the snapshot
//! the report is rendered from.

mod classify;
mod experiment;
mod record;
mod series;
mod snapshot;

pub use classify::{classify, classify_flags, tally};
pub use experiment::{Experiment, ExperimentRegistry};
pub use record::{TrialOutcome, equivalent, record_trial, values_equal};
pub use series::TimingSeries;
pub use snapshot::snapshot_of;
