use crate::chart::{render_chart, signed};
use crate::count::count_lines;
use crate::elapsed::distance_in_words;
use labnote_error::LabnoteError;
use labnote_stats::percentile;
use labnote_types::{ClassificationCounts, ReportConfig};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Everything one summary is drawn from.
///
/// Both series must already be sorted ascending.
#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    pub experiment: &'a str,
    /// Earliest and latest trial timestamps.
    pub span: Option<(OffsetDateTime, OffsetDateTime)>,
    pub counts: ClassificationCounts,
    pub time_deltas: &'a [f64],
    pub speedup_factors: &'a [f64],
}

/// Render the plain-text experiment summary.
///
/// With no trials the result is just the framed "No results" notice, without
/// a trailing newline. Otherwise the report ends with the closing rule and a
/// newline.
pub fn render_summary(
    input: &SummaryInput<'_>,
    config: &ReportConfig,
) -> Result<String, LabnoteError> {
    if !input.counts.is_consistent() {
        return Err(LabnoteError::PreconditionViolation(format!(
            "category counts do not add up to the total: {:?}",
            input.counts
        )));
    }

    let rule = "-".repeat(config.rule_width);

    if input.counts.is_empty() {
        let notice = format!("No results for experiment {:?}", input.experiment);
        return Ok([rule.as_str(), notice.as_str(), rule.as_str()].join("\n"));
    }

    let mut lines: Vec<String> = vec![
        rule.clone(),
        format!("Experiment: {}", input.experiment),
        rule.clone(),
    ];

    if let Some((earliest, latest)) = input.span {
        lines.push(format!("Earliest results: {}", timestamp(earliest)?));
        lines.push(format!(
            "Latest result:    {} ({})",
            timestamp(latest)?,
            distance_in_words(earliest, latest)
        ));
    }

    lines.push(String::new());
    lines.extend(count_lines(&input.counts));

    if !input.time_deltas.is_empty() {
        let at = |p: u32| percentile(p, input.time_deltas).map(|d| format!("{}s", signed(d, 3)));
        lines.push(String::new());
        lines.push(format!(
            "Median time delta: {}  (90% of observations between {} and {})",
            at(50)?,
            at(5)?,
            at(95)?
        ));
    }

    if !input.speedup_factors.is_empty() {
        lines.push(String::new());
        lines.push("Speedups (by percentiles):".to_string());
        lines.extend(render_chart(input.speedup_factors, config)?);
    }

    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Render into `sink`, writing the report verbatim.
pub fn write_summary<W: std::io::Write>(
    sink: &mut W,
    input: &SummaryInput<'_>,
    config: &ReportConfig,
) -> Result<(), LabnoteError> {
    let text = render_summary(input, config)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

/// RFC 3339 at whole-second precision.
fn timestamp(t: OffsetDateTime) -> Result<String, LabnoteError> {
    t.replace_nanosecond(0)
        .map_err(|e| LabnoteError::InvalidArgument(e.to_string()))?
        .format(&Rfc3339)
        .map_err(|e| LabnoteError::InvalidArgument(format!("unformattable timestamp {t}: {e}")))
}
