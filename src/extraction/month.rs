//! Month labelling from roster file names.
//!
//! Monthly files arrive with names like `DUTY ROSTER January 2025.xlsx`.
//! The label is the recognized month name plus a 4-digit year token, both
//! located anywhere in the normalized file name.

use crate::config::MonthTable;

use super::normalize::normalize;

/// Label used when no month name is recognized in a file name.
const UNKNOWN_MONTH: &str = "UNKNOWN";

/// Derives a month label (`"JANUARY 2025"`) from a roster file name.
///
/// The year is the first standalone `20xx` token, defaulting to
/// `default_year` when absent. The month is the longest configured month
/// name contained in the normalized file name, so `"MARCH"` wins over
/// `"MAR"`. When no month matches the label falls back to
/// `"UNKNOWN <year>"`.
///
/// # Example
///
/// ```no_run
/// use roster_audit::config::ConfigLoader;
/// use roster_audit::extraction::month_label;
///
/// let loader = ConfigLoader::load("./config/roster").unwrap();
/// let label = month_label("DUTY ROSTER January 2025.xlsx", loader.config().months(), 2025);
/// assert_eq!(label, "JANUARY 2025");
/// ```
pub fn month_label(file_name: &str, months: &MonthTable, default_year: i32) -> String {
    let norm = normalize(file_name);
    let year = find_year(&norm).unwrap_or(default_year);
    match months.find_in(&norm) {
        Some((name, _)) => format!("{name} {year}"),
        None => format!("{UNKNOWN_MONTH} {year}"),
    }
}

/// Chronological sort key for a month label: `year * 100 + month`.
///
/// Unrecognized month names sort with month number 0; a missing or
/// unparseable year part falls back to `default_year`. Labels produced by
/// [`month_label`] therefore order by true calendar position regardless
/// of the order files were supplied in.
pub fn month_sort_key(label: &str, months: &MonthTable, default_year: i32) -> i64 {
    let mut parts = label.split_whitespace();
    let name = parts.next().unwrap_or("");
    let year: i64 = parts
        .next()
        .and_then(|y| y.parse().ok())
        .unwrap_or(default_year as i64);
    let month = months.number_of(name).unwrap_or(0) as i64;
    year * 100 + month
}

/// Finds the first standalone 4-digit year token starting with `20`.
///
/// Standalone means not flanked by another ASCII alphanumeric character,
/// mirroring a word-boundary match.
fn find_year(normalized: &str) -> Option<i32> {
    let bytes = normalized.as_bytes();
    let len = bytes.len();
    for i in 0..len.saturating_sub(3) {
        if bytes[i] == b'2'
            && bytes[i + 1] == b'0'
            && bytes[i + 2].is_ascii_digit()
            && bytes[i + 3].is_ascii_digit()
        {
            let left_ok = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
            let right_ok = i + 4 >= len || !bytes[i + 4].is_ascii_alphanumeric();
            if left_ok && right_ok {
                return normalized[i..i + 4].parse().ok();
            }
        }
    }
    None
}
