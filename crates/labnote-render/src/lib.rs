//! Plain-text rendering for labnote.
//!
//! The summary is a fixed-layout block: a framed header, the time span, one
//! row per non-empty category, the median time delta and a percentile bar
//! chart of speedup factors. Rendering is pure and deterministic; the same
//! input always produces the same bytes.

pub mod chart;
mod count;
mod elapsed;
mod listing;
mod summary;

pub use chart::{ChartScale, FAINT, FILL, render_bar, render_chart, speedup_cue};
pub use count::{count_line, count_lines, with_delimiter};
pub use elapsed::distance_in_words;
pub use listing::{render_error_listing, render_mismatch_listing};
pub use summary::{SummaryInput, render_summary, write_summary};
