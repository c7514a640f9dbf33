//! labnote: record paired control/candidate trials and summarize them.
//!
//! This crate re-exports the workspace's public API so most users need a
//! single dependency:
//!
//! - [`stats`]: nearest-rank percentiles and signed speedup factors
//! - [`domain`]: trial classification, recording and snapshot aggregation
//! - [`render`]: the plain-text summary, bar chart and listings
//! - [`adapters`]: the [`TrialStore`] interface and an in-memory store
//! - [`app`]: record, summarize, list and purge use cases
//!
//! ```
//! use labnote::{
//!     ExperimentRegistry, FixedClock, MemoryTrialStore, Observation, RecordTrialRequest,
//!     RecordTrialUseCase, ReportConfig, SummarizeUseCase, TrialOutcome, CONTROL_NAME,
//! };
//! use serde_json::json;
//!
//! let mut store = MemoryTrialStore::new();
//! let mut registry = ExperimentRegistry::new();
//! let clock = FixedClock(time::macros::datetime!(2024-01-01 00:00:00 UTC));
//!
//! RecordTrialUseCase::new(&mut store, &mut registry, clock)
//!     .execute(RecordTrialRequest {
//!         experiment: "wibble".to_string(),
//!         outcome: TrialOutcome {
//!             control: Observation::returned(CONTROL_NAME, 1.0, json!("foo")),
//!             candidates: vec![Observation::returned("candidate", 0.5, json!("foo"))],
//!             context: None,
//!         },
//!     })
//!     .unwrap();
//!
//! let text = SummarizeUseCase::new(&store, ReportConfig::default())
//!     .render("wibble")
//!     .unwrap();
//! assert!(text.contains("1 of 1 (100.00%) correct"));
//! assert!(text.contains("+2.0x faster"));
//! ```

pub use labnote_adapters as adapters;
pub use labnote_app as app;
pub use labnote_config as config;
pub use labnote_domain as domain;
pub use labnote_error as error;
pub use labnote_render as render;
pub use labnote_stats as stats;
pub use labnote_types as types;

pub use labnote_adapters::{AdapterError, MemoryTrialStore, PurgeSummary, TrialStore};
pub use labnote_app::{
    Clock, FixedClock, ListingUseCase, PurgeUseCase, RecordTrialOutcome, RecordTrialRequest,
    RecordTrialUseCase, SummarizeUseCase, SummaryOutcome, SystemClock, report_config,
};
pub use labnote_config::{load_config, parse_config};
pub use labnote_domain::{
    Experiment, ExperimentRegistry, TimingSeries, TrialOutcome, classify, record_trial,
    snapshot_of, tally, values_equal,
};
pub use labnote_error::LabnoteError;
pub use labnote_render::{SummaryInput, render_summary, write_summary};
pub use labnote_stats::{Speedup, compute_factor, compute_time_delta, percentile};
pub use labnote_types::{
    CONTROL_NAME, Category, ClassificationCounts, ConfigFile, ExceptionInfo, ExperimentSnapshot,
    Observation, ReportConfig, TIMEOUT_ERROR_TYPE, TimingPair, TrialRecord,
};
