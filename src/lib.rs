//! Labnote workspace-level test utilities.
//!
//! This crate exists solely to support workspace-level integration tests,
//! particularly the BDD/cucumber tests in `tests/cucumber.rs`.
//!
//! The actual labnote functionality is in the workspace member crates:
//! - `labnote-types`: Shared types and JSON schemas
//! - `labnote-stats`: Percentiles and speedup factors
//! - `labnote-domain`: Classification, trial recording and snapshots
//! - `labnote-render`: The plain-text summary and listings
//! - `labnote-adapters`: Trial stores
//! - `labnote-app`: Application use cases
//! - `labnote`: Facade re-exporting all of the above
