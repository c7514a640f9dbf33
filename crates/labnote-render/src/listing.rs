//! Framed per-trial listings for mismatched and errored trials.

use labnote_types::{Observation, TrialRecord};
use std::fmt::Write as _;

const LISTING_WIDTH: usize = 100;

/// Control and candidate values side by side for every mismatched trial.
///
/// Returns an empty string when there is nothing to list.
pub fn render_mismatch_listing(experiment: &str, trials: &[TrialRecord]) -> String {
    render_listing(experiment, trials, |out, trial| {
        for candidate in &trial.candidates {
            let _ = writeln!(out, "{}", value_row(&trial.control));
            let _ = writeln!(out, "{}", value_row(candidate));
        }
    })
}

/// One `* <type>:  <message>` row per raising candidate.
///
/// Returns an empty string when there is nothing to list.
pub fn render_error_listing(experiment: &str, trials: &[TrialRecord]) -> String {
    render_listing(experiment, trials, |out, trial| {
        for exception in trial.candidates.iter().filter_map(|c| c.exception.as_ref()) {
            let _ = writeln!(out, "  * {}:  {}", exception.type_name, exception.message);
        }
    })
}

fn render_listing<F>(experiment: &str, trials: &[TrialRecord], mut body: F) -> String
where
    F: FnMut(&mut String, &TrialRecord),
{
    if trials.is_empty() {
        return String::new();
    }

    let heavy = "=".repeat(LISTING_WIDTH);
    let light = "-".repeat(LISTING_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "Comparing results for {experiment}:");
    let _ = writeln!(out);

    for trial in trials {
        let _ = writeln!(out);
        let _ = writeln!(out, "{light}");
        let _ = writeln!(out, "Result #{}", trial.id);
        body(&mut out, trial);
        let _ = writeln!(out, "{light}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out);
    out
}

fn value_row(observation: &Observation) -> String {
    let value = observation
        .value
        .as_ref()
        .map_or_else(|| "null".to_string(), |v| v.to_string());
    format!("    {:>20} # => {}", observation.name, value)
}
