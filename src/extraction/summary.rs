//! Management summary-sheet totals.
//!
//! Each roster file may carry a summary sheet (conventionally named
//! `Table 1`) with management-reported headcount figures. Its layout
//! varies, so the two figure columns are located by synonym within the
//! header scan window, and the totals row is the first row whose first
//! cell contains the configured marker (`TOTAL=`). Every absence — the
//! sheet, either column, or the totals row — degrades to zero; missing
//! summary data is an expected case, not an error.

use crate::config::SummarySynonyms;
use crate::models::Sheet;

use super::normalize::{matches_any, normalize, normalize_cell};

/// Management-reported totals for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryTotals {
    /// Reported staff on site.
    pub actual_on_site: i64,
    /// Reported staff on vacation.
    pub used_vacation: i64,
}

/// Extracts the reported figures from a summary sheet.
///
/// Scans the first `scan_rows` rows for cells matching the
/// actual-on-site and used-vacation synonym sets (the last matching cell
/// wins), then scans the whole sheet for the totals row. Figures are read
/// at the intersections; anything missing reads as 0.
///
/// # Example
///
/// ```
/// use roster_audit::config::SummarySynonyms;
/// use roster_audit::extraction::extract_summary_totals;
/// use roster_audit::models::{CellValue, Sheet};
///
/// let vocab = SummarySynonyms {
///     sheet_name: "Table 1".to_string(),
///     total_row_marker: "TOTAL=".to_string(),
///     actual_on_site: vec!["ACTUAL ON SITE".to_string()],
///     used_vacation: vec!["USED VACATION".to_string()],
/// };
/// let sheet = Sheet {
///     name: "Table 1".to_string(),
///     rows: vec![
///         vec![
///             CellValue::Text("Dept".to_string()),
///             CellValue::Text("Actual on site".to_string()),
///             CellValue::Text("Used vacation".to_string()),
///         ],
///         vec![
///             CellValue::Text("TOTAL=".to_string()),
///             CellValue::Number(500.0),
///             CellValue::Number(470.0),
///         ],
///     ],
/// };
/// let totals = extract_summary_totals(&sheet, &vocab, 50);
/// assert_eq!(totals.actual_on_site, 500);
/// assert_eq!(totals.used_vacation, 470);
/// ```
pub fn extract_summary_totals(
    sheet: &Sheet,
    vocab: &SummarySynonyms,
    scan_rows: usize,
) -> SummaryTotals {
    let mut actual_col = None;
    let mut used_col = None;

    for row in sheet.rows.iter().take(scan_rows) {
        for (col_idx, cell) in row.iter().enumerate() {
            let norm = normalize_cell(cell);
            if norm.is_empty() {
                continue;
            }
            if matches_any(&norm, &vocab.actual_on_site) {
                actual_col = Some(col_idx);
            }
            if matches_any(&norm, &vocab.used_vacation) {
                used_col = Some(col_idx);
            }
        }
    }

    let marker = normalize(&vocab.total_row_marker);
    let total_row = sheet.rows.iter().position(|row| {
        row.first()
            .map(|cell| normalize_cell(cell).contains(&marker))
            .unwrap_or(false)
    });

    let mut totals = SummaryTotals::default();
    if let Some(row_idx) = total_row {
        if let Some(col) = actual_col {
            totals.actual_on_site = sheet.cell(row_idx, col).map_or(0, |c| c.as_count());
        }
        if let Some(col) = used_col {
            totals.used_vacation = sheet.cell(row_idx, col).map_or(0, |c| c.as_count());
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    fn vocab() -> SummarySynonyms {
        SummarySynonyms {
            sheet_name: "Table 1".to_string(),
            total_row_marker: "TOTAL=".to_string(),
            actual_on_site: vec!["ACTUAL ON SITE".to_string(), "TOTAL STAFF".to_string()],
            used_vacation: vec!["USED VACATION".to_string(), "الموجودين".to_string()],
        }
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    #[test]
    fn test_totals_read_at_intersections() {
        let sheet = Sheet {
            name: "Table 1".to_string(),
            rows: vec![
                vec![text("Monthly Attendance Summary")],
                vec![text("Dept"), text("ACTUAL ON SITE"), text("USED VACATION")],
                vec![text("Nursing"), num(300.0), num(280.0)],
                vec![text("TOTAL= ALL"), num(500.0), num(470.0)],
            ],
        };
        let totals = extract_summary_totals(&sheet, &vocab(), 50);
        assert_eq!(totals.actual_on_site, 500);
        assert_eq!(totals.used_vacation, 470);
    }

    #[test]
    fn test_synonym_and_arabic_headers() {
        let sheet = Sheet {
            name: "Table 1".to_string(),
            rows: vec![
                vec![text("القسم"), text("Total Staff"), text("الموجودين")],
                vec![text("total=" ), num(512.0), num(498.0)],
            ],
        };
        let totals = extract_summary_totals(&sheet, &vocab(), 50);
        assert_eq!(totals.actual_on_site, 512);
        assert_eq!(totals.used_vacation, 498);
    }

    #[test]
    fn test_missing_total_row_defaults_to_zero() {
        let sheet = Sheet {
            name: "Table 1".to_string(),
            rows: vec![vec![text("ACTUAL ON SITE"), text("USED VACATION")]],
        };
        let totals = extract_summary_totals(&sheet, &vocab(), 50);
        assert_eq!(totals, SummaryTotals::default());
    }

    #[test]
    fn test_missing_columns_default_to_zero() {
        let sheet = Sheet {
            name: "Table 1".to_string(),
            rows: vec![
                vec![text("Dept"), text("Headcount")],
                vec![text("TOTAL="), num(500.0)],
            ],
        };
        let totals = extract_summary_totals(&sheet, &vocab(), 50);
        assert_eq!(totals, SummaryTotals::default());
    }

    #[test]
    fn test_total_row_may_lie_beyond_scan_window() {
        // Column headers must be inside the window; the totals row is
        // searched through the whole sheet.
        let mut rows = vec![vec![text("ACTUAL ON SITE"), text("USED VACATION")]];
        for _ in 0..80 {
            rows.push(vec![text("dept"), num(1.0)]);
        }
        rows.push(vec![text("TOTAL="), num(500.0), num(470.0)]);
        let sheet = Sheet {
            name: "Table 1".to_string(),
            rows,
        };
        let totals = extract_summary_totals(&sheet, &vocab(), 50);
        assert_eq!(totals.actual_on_site, 500);
        assert_eq!(totals.used_vacation, 470);
    }

    #[test]
    fn test_first_marker_row_wins() {
        let sheet = Sheet {
            name: "Table 1".to_string(),
            rows: vec![
                vec![text("ACTUAL ON SITE"), text("USED VACATION")],
                vec![text("TOTAL="), num(100.0), num(90.0)],
                vec![text("TOTAL="), num(999.0), num(999.0)],
            ],
        };
        let totals = extract_summary_totals(&sheet, &vocab(), 50);
        assert_eq!(totals.actual_on_site, 100);
        assert_eq!(totals.used_vacation, 90);
    }

    #[test]
    fn test_textual_figures_are_parsed() {
        let sheet = Sheet {
            name: "Table 1".to_string(),
            rows: vec![
                vec![text("Dept"), text("ACTUAL ON SITE"), text("USED VACATION")],
                vec![text("TOTAL="), text(" 500 "), text("n/a")],
            ],
        };
        let totals = extract_summary_totals(&sheet, &vocab(), 50);
        assert_eq!(totals.actual_on_site, 500);
        assert_eq!(totals.used_vacation, 0);
    }
}
