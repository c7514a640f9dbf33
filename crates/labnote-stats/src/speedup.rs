use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// `baseline - comparison`, or `None` when either side is missing.
pub fn compute_time_delta(baseline: Option<f64>, comparison: Option<f64>) -> Option<f64> {
    Some(baseline? - comparison?)
}

/// Signed speedup of `comparison` relative to `baseline`.
///
/// Positive means the comparison was that many times faster
/// (`baseline / comparison`), negative means that many times slower
/// (`-comparison / baseline`), and exactly zero means equal. The factor is
/// therefore never inside `(-1, 1)` except at zero.
///
/// A zero duration on either side is never trustworthy timing data, so it
/// yields `None` rather than an infinite or absurdly large factor.
pub fn compute_factor(baseline: Option<f64>, comparison: Option<f64>) -> Option<f64> {
    let (b, c) = (baseline?, comparison?);
    if b == 0.0 || c == 0.0 {
        return None;
    }

    let time = compute_time_delta(Some(b), Some(c))?;
    if time > 0.0 {
        Some(b / c)
    } else if time < 0.0 {
        Some(-(c / b))
    } else {
        Some(0.0)
    }
}

/// Time delta and speedup factor for one control/candidate pair.
///
/// Any of the four values may be supplied; `time` and `factor` are derived
/// from the durations only when they were not supplied, so values read back
/// from storage are kept as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Speedup {
    baseline: Option<f64>,
    comparison: Option<f64>,
    time: Option<f64>,
    factor: Option<f64>,
}

impl Speedup {
    pub fn new(
        baseline: Option<f64>,
        comparison: Option<f64>,
        time: Option<f64>,
        factor: Option<f64>,
    ) -> Self {
        Self {
            baseline,
            comparison,
            time: time.or_else(|| compute_time_delta(baseline, comparison)),
            factor: factor.or_else(|| compute_factor(baseline, comparison)),
        }
    }

    pub fn from_durations(baseline: f64, comparison: f64) -> Self {
        Self::new(Some(baseline), Some(comparison), None, None)
    }

    /// Rebuild from the two persisted scalars.
    pub fn from_stored(time: Option<f64>, factor: Option<f64>) -> Self {
        Self::new(None, None, time, factor)
    }

    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    pub fn comparison(&self) -> Option<f64> {
        self.comparison
    }

    pub fn time(&self) -> Option<f64> {
        self.time
    }

    pub fn factor(&self) -> Option<f64> {
        self.factor
    }

    /// Order by factor alone. `None` when either factor is unknown.
    pub fn partial_cmp_by_factor(&self, other: &Self) -> Option<Ordering> {
        self.factor?.partial_cmp(&other.factor?)
    }

    /// Both values present, and neither contradicts the durations.
    pub fn is_valid(&self) -> bool {
        let (Some(time), Some(factor)) = (self.time, self.factor) else {
            return false;
        };

        if let Some(expected) = compute_time_delta(self.baseline, self.comparison)
            && time != expected
        {
            return false;
        }
        if let Some(expected) = compute_factor(self.baseline, self.comparison)
            && factor != expected
        {
            return false;
        }
        true
    }
}
