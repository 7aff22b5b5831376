//! Request types for the roster audit API.
//!
//! This module defines the JSON request structures for the `/audit`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{CellValue, RosterFile, Sheet};

/// Request body for the `/audit` endpoint.
///
/// Carries a batch of decoded roster files. Files are processed in the
/// order given, which decides overwrite behavior for employees appearing
/// in more than one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    /// The roster files to reconcile.
    pub files: Vec<RosterFileRequest>,
}

/// One decoded roster file in an audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFileRequest {
    /// The original file name; the month label is derived from it.
    pub file_name: String,
    /// The decoded sheets.
    #[serde(default)]
    pub sheets: Vec<SheetRequest>,
}

/// One sheet of cell data in an audit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRequest {
    /// The sheet name.
    pub name: String,
    /// The cell grid; rows may be ragged.
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl From<RosterFileRequest> for RosterFile {
    fn from(req: RosterFileRequest) -> Self {
        RosterFile {
            file_name: req.file_name,
            sheets: req.sheets.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SheetRequest> for Sheet {
    fn from(req: SheetRequest) -> Self {
        Sheet {
            name: req.name,
            rows: req.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_with_defaults() {
        let json = r#"{
            "files": [
                { "file_name": "January 2025.xlsx" },
                { "file_name": "February 2025.xlsx", "sheets": [{ "name": "Staff" }] }
            ]
        }"#;
        let request: AuditRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.files.len(), 2);
        assert!(request.files[0].sheets.is_empty());
        assert!(request.files[1].sheets[0].rows.is_empty());
    }

    #[test]
    fn test_request_converts_to_domain_types() {
        let json = r#"{
            "files": [{
                "file_name": "March 2025.xlsx",
                "sheets": [{
                    "name": "Nursing",
                    "rows": [["MRN", "NAME", 3, null]]
                }]
            }]
        }"#;
        let request: AuditRequest = serde_json::from_str(json).unwrap();
        let file: RosterFile = request.files.into_iter().next().unwrap().into();
        assert_eq!(file.file_name, "March 2025.xlsx");
        assert_eq!(file.sheets[0].rows[0].len(), 4);
        assert_eq!(file.sheets[0].rows[0][3], CellValue::Empty);
    }
}
