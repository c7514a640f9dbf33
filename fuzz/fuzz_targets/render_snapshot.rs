#![no_main]

use labnote_domain::TimingSeries;
use labnote_render::{SummaryInput, render_summary};
use labnote_types::{ExperimentSnapshot, ReportConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(snapshot) = serde_json::from_slice::<ExperimentSnapshot>(data) {
        let series = TimingSeries::from_pairs(&snapshot.timings);
        let input = SummaryInput {
            experiment: &snapshot.experiment,
            span: snapshot.earliest.zip(snapshot.latest),
            counts: snapshot.counts,
            time_deltas: &series.time_deltas,
            speedup_factors: &series.speedup_factors,
        };
        let _ = render_summary(&input, &ReportConfig::default());
    }
});
