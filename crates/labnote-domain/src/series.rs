use labnote_stats::Speedup;
use labnote_types::TimingPair;

/// The two ascending series the report charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingSeries {
    pub time_deltas: Vec<f64>,
    pub speedup_factors: Vec<f64>,
}

impl TimingSeries {
    /// Rebuild a [`Speedup`] from each stored pair, drop missing and
    /// non-finite values independently per series, then sort ascending.
    pub fn from_pairs(pairs: &[TimingPair]) -> Self {
        let speedups: Vec<Speedup> = pairs
            .iter()
            .map(|p| Speedup::from_stored(p.time_delta, p.speedup_factor))
            .collect();

        Self {
            time_deltas: sorted_present(speedups.iter().map(Speedup::time)),
            speedup_factors: sorted_present(speedups.iter().map(Speedup::factor)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.time_deltas.is_empty() && self.speedup_factors.is_empty()
    }
}

fn sorted_present(values: impl Iterator<Item = Option<f64>>) -> Vec<f64> {
    let mut v: Vec<f64> = values.flatten().filter(|x| x.is_finite()).collect();
    v.sort_by(f64::total_cmp);
    v
}
