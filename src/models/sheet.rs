//! Grid input models.
//!
//! The engine does not read spreadsheet files itself; callers decode each
//! file into a [`RosterFile`] of named [`Sheet`]s, where every sheet is a
//! rectangular grid of scalar [`CellValue`]s addressed by row and column.

use serde::{Deserialize, Serialize};

/// A scalar cell value from a roster sheet.
///
/// Serialized untagged, so a JSON grid reads naturally: numbers, strings,
/// booleans, and `null` for empty cells.
///
/// # Example
///
/// ```
/// use roster_audit::models::CellValue;
///
/// let row: Vec<CellValue> = serde_json::from_str(r#"["ALI HASSAN", 1042, null]"#).unwrap();
/// assert_eq!(row[0].as_text(), "ALI HASSAN");
/// assert_eq!(row[1].as_text(), "1042");
/// assert!(row[2].is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell.
    Number(f64),
    /// A boolean cell.
    Bool(bool),
    /// A text cell.
    Text(String),
    /// An empty or absent cell.
    Empty,
}

impl CellValue {
    /// Returns true if the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the cell content as a plain string.
    ///
    /// Numbers render without a trailing `.0` for whole values, matching
    /// the way roster identifiers are typically stored as numeric cells.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }

    /// Reads the cell as an integer count, defaulting to 0.
    ///
    /// Management summary figures are headcounts; fractional values are
    /// truncated and unparseable text degrades to 0 rather than erroring.
    pub fn as_count(&self) -> i64 {
        match self {
            CellValue::Number(n) => *n as i64,
            CellValue::Text(s) => s.trim().parse::<f64>().map(|v| v as i64).unwrap_or(0),
            _ => 0,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

/// One named sheet as a rectangular grid of cell values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// The sheet name as it appears in the workbook.
    pub name: String,
    /// Row-major grid of cell values. Rows may be ragged; missing cells
    /// are treated as empty.
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Returns the cell at the given position, if present in the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// One monthly roster file decoded into sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    /// The original file name; the month label is derived from it.
    pub file_name: String,
    /// All sheets in the file, in workbook order.
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl RosterFile {
    /// Finds a sheet by its exact name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
        assert!(!CellValue::Text(String::new()).is_empty());
    }

    #[test]
    fn test_as_text_formats_whole_numbers_without_fraction() {
        assert_eq!(CellValue::Number(1042.0).as_text(), "1042");
        assert_eq!(CellValue::Number(12.5).as_text(), "12.5");
        assert_eq!(CellValue::Text("MRN-7".to_string()).as_text(), "MRN-7");
        assert_eq!(CellValue::Bool(true).as_text(), "true");
        assert_eq!(CellValue::Empty.as_text(), "");
    }

    #[test]
    fn test_as_count_truncates_and_defaults() {
        assert_eq!(CellValue::Number(470.0).as_count(), 470);
        assert_eq!(CellValue::Number(470.9).as_count(), 470);
        assert_eq!(CellValue::Text(" 500 ".to_string()).as_count(), 500);
        assert_eq!(CellValue::Text("n/a".to_string()).as_count(), 0);
        assert_eq!(CellValue::Empty.as_count(), 0);
        assert_eq!(CellValue::Bool(true).as_count(), 0);
    }

    #[test]
    fn test_untagged_deserialization() {
        let row: Vec<CellValue> =
            serde_json::from_str(r#"["NAME", 3, true, null, "ملاحظات"]"#).unwrap();
        assert_eq!(row[0], CellValue::Text("NAME".to_string()));
        assert_eq!(row[1], CellValue::Number(3.0));
        assert_eq!(row[2], CellValue::Bool(true));
        assert_eq!(row[3], CellValue::Empty);
        assert_eq!(row[4], CellValue::Text("ملاحظات".to_string()));
    }

    #[test]
    fn test_empty_serializes_as_null() {
        let json = serde_json::to_string(&CellValue::Empty).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_sheet_cell_out_of_bounds_is_none() {
        let sheet = Sheet {
            name: "Staff".to_string(),
            rows: vec![vec![CellValue::Text("NAME".to_string())]],
        };
        assert!(sheet.cell(0, 0).is_some());
        assert!(sheet.cell(0, 1).is_none());
        assert!(sheet.cell(5, 0).is_none());
    }

    #[test]
    fn test_roster_file_sheet_lookup_is_exact() {
        let file = RosterFile {
            file_name: "roster.xlsx".to_string(),
            sheets: vec![
                Sheet {
                    name: "Table 1".to_string(),
                    rows: vec![],
                },
                Sheet {
                    name: "Nursing".to_string(),
                    rows: vec![],
                },
            ],
        };
        assert!(file.sheet("Table 1").is_some());
        assert!(file.sheet("table 1").is_none());
        assert!(file.sheet("Missing").is_none());
    }
}
