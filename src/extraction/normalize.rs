//! Text normalization.
//!
//! Every textual comparison in the engine goes through [`normalize`]; no
//! raw-cased comparison happens anywhere downstream.

use crate::models::CellValue;

/// Upper-cases, whitespace-collapses, and trims arbitrary text.
///
/// Empty input yields an empty string.
///
/// # Example
///
/// ```
/// use roster_audit::extraction::normalize;
///
/// assert_eq!(normalize("  full\t name \n"), "FULL NAME");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a cell value, treating empty cells as empty strings.
pub fn normalize_cell(cell: &CellValue) -> String {
    normalize(&cell.as_text())
}

/// True when the normalized text contains any of the synonyms.
///
/// Synonyms are normalized before comparison so configuration files may
/// carry them in any casing.
pub fn matches_any(normalized_text: &str, synonyms: &[String]) -> bool {
    synonyms
        .iter()
        .any(|syn| normalized_text.contains(&normalize(syn)))
}
