//! The percentile bar chart.
//!
//! Each row draws one speedup factor on a bar of `2 * scale + 1` cells:
//! slowdowns fill the left half, speedups the right, and a factor of exactly
//! zero fills the center cell.

use labnote_error::LabnoteError;
use labnote_stats::percentile;
use labnote_types::ReportConfig;

pub const FILL: char = '█';
pub const FAINT: char = '·';

/// Percentile whose row gets faint guide marks.
const HIGHLIGHT_PERCENTILE: u32 = 50;

/// `%+.1fx` padded on the left to this width.
const CUE_WIDTH: usize = 7;

/// Chart scaling shared by every row of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub bar_scale: usize,
    pub magnitude: f64,
}

impl ChartScale {
    /// `max(|floor(min)|, |ceil(max)|)` over an ascending series, falling
    /// back to `default_magnitude` when that is zero.
    pub fn for_factors(sorted: &[f64], config: &ReportConfig) -> Self {
        let magnitude = match (sorted.first(), sorted.last()) {
            (Some(min), Some(max)) => min.floor().abs().max(max.ceil().abs()),
            _ => 0.0,
        };
        let magnitude = if magnitude == 0.0 {
            f64::from(config.default_magnitude)
        } else {
            magnitude
        };
        Self {
            bar_scale: config.bar_scale,
            magnitude,
        }
    }

    /// Cell index within one half of the bar, always below `bar_scale`
    /// when `bar_scale > 0`.
    fn cell(&self, factor: f64) -> usize {
        let last = self.bar_scale.saturating_sub(1) as f64;
        let normalized = (self.bar_scale as f64 * (factor.abs() / self.magnitude)).floor();
        normalized.clamp(0.0, last) as usize
    }
}

/// `[<left half><center><right half>]`
pub fn render_bar(factor: f64, scale: &ChartScale, highlight: bool) -> String {
    let mut neg = vec![' '; scale.bar_scale];
    let mut pos = vec![' '; scale.bar_scale];

    let mid = if factor == 0.0 {
        FILL
    } else if factor < 0.0 {
        if let Some(cell) = neg.get_mut(scale.cell(factor)) {
            *cell = FILL;
        }
        neg.reverse();
        FAINT
    } else {
        if let Some(cell) = pos.get_mut(scale.cell(factor)) {
            *cell = FILL;
        }
        FAINT
    };

    let mut bar = String::with_capacity((2 * scale.bar_scale + 3) * 3);
    bar.push('[');
    bar.extend(neg);
    bar.push(mid);
    bar.extend(pos);
    bar.push(']');

    if highlight { highlight_bar(&bar) } else { bar }
}

/// Dot the blank runs on both sides of the fill, working inward from the
/// brackets.
fn highlight_bar(bar: &str) -> String {
    let Some((left, right)) = bar.split_once(FILL) else {
        return bar.to_string();
    };

    let dotted = format!(" {FAINT}");
    let left = left.replace("  ", &dotted);
    let right = reverse(&reverse(right).replace("  ", &dotted));

    format!("{left}{FILL}{right}")
}

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// `%+.1fx` right-aligned, plus ` faster` for positive factors.
pub fn speedup_cue(factor: f64) -> String {
    let rel = format!("{}x", signed(factor, 1));
    let mut cue = format!("{rel:>width$}", width = CUE_WIDTH);
    if factor > 0.0 {
        cue.push_str(" faster");
    }
    cue
}

/// One chart row, without indentation.
pub fn render_line(
    n: u32,
    sorted_factors: &[f64],
    scale: &ChartScale,
) -> Result<String, LabnoteError> {
    let factor = percentile(n, sorted_factors)?;
    let bar = render_bar(factor, scale, n == HIGHLIGHT_PERCENTILE);
    Ok(format!("{n:>3}%  {bar}  {}", speedup_cue(factor)))
}

/// Every chart row from the 0th to the 100th percentile.
///
/// A zero `bar_scale` has no cells to fill and fails with
/// [`LabnoteError::InvalidArgument`].
pub fn render_chart(
    sorted_factors: &[f64],
    config: &ReportConfig,
) -> Result<Vec<String>, LabnoteError> {
    if config.bar_scale == 0 {
        return Err(LabnoteError::InvalidArgument(
            "bar_scale must be at least 1".to_string(),
        ));
    }
    let scale = ChartScale::for_factors(sorted_factors, config);
    let indent = " ".repeat(config.indent);
    let step = config.percentile_step.max(1) as usize;

    (0..=100u32)
        .step_by(step)
        .map(|n| render_line(n, sorted_factors, &scale).map(|line| format!("{indent}{line}")))
        .collect()
}

/// `%+.<precision>f` with negative zero printed as positive.
pub(crate) fn signed(x: f64, precision: usize) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{x:+.precision$}")
}
