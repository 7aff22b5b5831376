//! Header-row location and column-role resolution.
//!
//! Roster sheets bury their header row at a varying depth under titles,
//! logos, and merged banners. The resolver scans a bounded window of
//! leading rows, testing every cell against the configured synonym sets,
//! and stops at the first row in which a name column is identified.

use crate::config::ColumnSynonyms;
use crate::models::Sheet;

use super::normalize::{matches_any, normalize, normalize_cell};

/// Resolved column indices for the roles the engine understands.
///
/// Only `name` is required for a sheet to be processed; `identifier`
/// matters for employee keying, and the rest are optional enrichment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    /// Index of the employee-name column.
    pub name: Option<usize>,
    /// Index of the identifier column.
    pub identifier: Option<usize>,
    /// Index of the remarks/comments column.
    pub comments: Option<usize>,
    /// Index of the position column.
    pub position: Option<usize>,
    /// Index of the location column.
    pub location: Option<usize>,
}

/// A located header row and its role mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderResolution {
    /// Zero-based index of the header row; data rows start below it.
    pub header_row: usize,
    /// Role-to-column mapping accumulated up to and including the header
    /// row.
    pub columns: ColumnMap,
}

/// Scans a sheet for its header row and column roles.
///
/// At most `scan_rows` leading rows are examined. Role matches accumulate
/// across scanned rows; the scan ends at the first row containing a name
/// column, which becomes the header row. A preferred name label (e.g.
/// `NAME (ENG)`) or the exact `name_exact` label overrides a generic name
/// synonym that matched an earlier cell in the same row.
///
/// Returns `None` when no row within the window contains a name column;
/// callers treat that as a silent skip, not an error.
///
/// # Example
///
/// ```
/// use roster_audit::config::ColumnSynonyms;
/// use roster_audit::extraction::resolve_header;
/// use roster_audit::models::{CellValue, Sheet};
///
/// let columns = ColumnSynonyms {
///     name_exact: "NAME".to_string(),
///     name_preferred: vec!["NAME (ENG)".to_string()],
///     name: vec!["NAME".to_string(), "FULL NAME".to_string()],
///     identifier: vec!["MRN".to_string()],
///     comments: vec!["REMARKS".to_string()],
///     position: vec!["POSITION".to_string()],
///     location: vec!["WARD".to_string()],
/// };
/// let sheet = Sheet {
///     name: "Nursing".to_string(),
///     rows: vec![
///         vec![CellValue::Text("Duty Roster".to_string())],
///         vec![
///             CellValue::Text("MRN".to_string()),
///             CellValue::Text("FULL NAME".to_string()),
///             CellValue::Text("REMARKS".to_string()),
///         ],
///     ],
/// };
/// let resolution = resolve_header(&sheet, &columns, 50).unwrap();
/// assert_eq!(resolution.header_row, 1);
/// assert_eq!(resolution.columns.name, Some(1));
/// assert_eq!(resolution.columns.identifier, Some(0));
/// ```
pub fn resolve_header(
    sheet: &Sheet,
    columns: &ColumnSynonyms,
    scan_rows: usize,
) -> Option<HeaderResolution> {
    let name_exact = normalize(&columns.name_exact);
    let limit = sheet.rows.len().min(scan_rows);

    let mut map = ColumnMap::default();

    for (row_idx, row) in sheet.rows.iter().take(limit).enumerate() {
        let mut found_name = false;

        for (col_idx, cell) in row.iter().enumerate() {
            let norm = normalize_cell(cell);
            if norm.is_empty() {
                continue;
            }

            if matches_any(&norm, &columns.name_preferred) || norm == name_exact {
                map.name = Some(col_idx);
                found_name = true;
            } else if map.name.is_none() && matches_any(&norm, &columns.name) {
                map.name = Some(col_idx);
                found_name = true;
            }

            if matches_any(&norm, &columns.identifier) {
                map.identifier = Some(col_idx);
            }
            if matches_any(&norm, &columns.comments) {
                map.comments = Some(col_idx);
            }
            if matches_any(&norm, &columns.position) {
                map.position = Some(col_idx);
            }
            if matches_any(&norm, &columns.location) {
                map.location = Some(col_idx);
            }
        }

        if found_name {
            return Some(HeaderResolution {
                header_row: row_idx,
                columns: map,
            });
        }
    }

    None
}
