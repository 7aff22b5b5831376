//! Vacation register models.
//!
//! These records are produced by the date-range extractor and the per-file
//! reconciler: confirmed vacation instances and the exception rows raised
//! for remarks whose date tokens could not be paired.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized vacation date range extracted from a free-text remark.
///
/// Produced only by the date-range extractor and immutable once created.
/// The start date never exceeds the end date (reversed inputs are swapped)
/// and the duration is inclusive, so it is always at least 1.
///
/// # Example
///
/// ```
/// use roster_audit::models::VacationRange;
/// use chrono::NaiveDate;
///
/// let range = VacationRange {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     duration: 6,
///     original_text: "05/03/2025 - 10/03/2025".to_string(),
/// };
/// assert_eq!(range.duration, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRange {
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Inclusive day count: `end_date - start_date + 1`.
    pub duration: i64,
    /// The raw date tokens the range was built from.
    pub original_text: String,
}

/// One confirmed vacation instance in the detailed register.
///
/// A single remark may yield multiple rows when it contains more than one
/// date pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedVacationRow {
    /// The month label of the source file (e.g. "MARCH 2025").
    pub month: String,
    /// The employee identifier; empty when the roster row had none.
    pub identifier: String,
    /// The employee name as written in the roster.
    pub name: String,
    /// The employee's location/ward, when the sheet carried one.
    pub location: String,
    /// The content sheet the row was extracted from.
    pub sheet_name: String,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Inclusive day count.
    pub duration: i64,
    /// The full remark the range was extracted from.
    pub original_comments: String,
}

impl DetailedVacationRow {
    /// The stable deduplication key for this person: the identifier when
    /// present, otherwise the name.
    pub fn person_key(&self) -> &str {
        if self.identifier.is_empty() {
            &self.name
        } else {
            &self.identifier
        }
    }
}

/// A remark that contained date-like tokens but produced no valid range.
///
/// Exceptions are human-review anomalies, never processing failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionRow {
    /// The month label of the source file.
    pub month: String,
    /// The employee identifier; empty when the roster row had none.
    pub identifier: String,
    /// The employee name as written in the roster.
    pub name: String,
    /// The employee's location/ward, when the sheet carried one.
    pub location: String,
    /// The content sheet the row was extracted from.
    pub sheet_name: String,
    /// The detected problems, joined by `", "` when there are several.
    pub problem_type: String,
    /// The full offending remark.
    pub original_comments: String,
}
