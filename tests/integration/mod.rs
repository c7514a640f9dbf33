//! Cross-crate integration tests.

mod end_to_end;
mod snapshot_json;
