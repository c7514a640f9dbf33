use labnote_types::{Category, ClassificationCounts};

/// `1234567` -> `1,234,567`
pub fn with_delimiter(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `<n> of <total> (<rate>%) <label>`, both numbers padded to the wider one.
pub fn count_line(n: u64, total: u64, label: &str) -> String {
    let n_text = with_delimiter(n);
    let total_text = with_delimiter(total);
    let width = n_text.len().max(total_text.len());
    let rate = if total == 0 {
        0.0
    } else {
        100.0 * n as f64 / total as f64
    };
    format!("{n_text:>width$} of {total_text:>width$} ({rate:.2}%) {label}")
}

/// Count rows in report order, skipping empty categories.
pub fn count_lines(counts: &ClassificationCounts) -> Vec<String> {
    Category::ALL
        .iter()
        .map(|c| (counts.get(*c), c.label()))
        .filter(|(n, _)| *n > 0)
        .map(|(n, label)| count_line(n, counts.total, label))
        .collect()
}
