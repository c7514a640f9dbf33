//! Unified error type for labnote.
//!
//! Two kinds of failure matter to the statistics core: a caller handed over a
//! value outside the contract (`InvalidArgument`), or an input invariant the
//! core relies on did not hold (`PreconditionViolation`). Both are programmer
//! errors and are never retried. The remaining variants wrap boundary errors
//! from configuration parsing and I/O.

use std::fmt::Debug;

#[derive(Debug, thiserror::Error)]
pub enum LabnoteError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = LabnoteError> = std::result::Result<T, E>;

impl LabnoteError {
    /// The series handed to a percentile lookup was not non-decreasing.
    pub fn not_sorted<T: Debug>(list: &[T]) -> Self {
        Self::PreconditionViolation(format!("series is not sorted: {list:?}"))
    }

    pub fn empty_series() -> Self {
        Self::PreconditionViolation("series is empty".to_string())
    }

    pub fn percentile_out_of_range(p: u32) -> Self {
        Self::InvalidArgument(format!(
            "percentile must be an integer between 0 and 100, not {p}"
        ))
    }

    /// True for errors that indicate a bug in the caller rather than bad
    /// external input.
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::PreconditionViolation(_)
        )
    }
}
