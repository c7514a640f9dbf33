//! Statistics for labnote.
//!
//! This crate is intentionally I/O-free: nearest-rank percentiles over
//! pre-sorted series, and the signed speedup arithmetic used to compare a
//! control duration against a candidate duration.

mod percentile;
mod speedup;

pub use percentile::{MAX_PERCENTILE, MIN_PERCENTILE, is_sorted, percentile};
pub use speedup::{Speedup, compute_factor, compute_time_delta};
