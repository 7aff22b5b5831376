//! Export projections.
//!
//! Data-only shapes for downstream writers: flat named tables for
//! workbook export and paginated documents for report rendering. Nothing
//! here performs I/O or binary encoding.

mod report;
mod workbook;

pub use report::{board_report, reconciliation_report, ReportDocument, ReportPage};
pub use workbook::{audit_workbook, vacation_register_workbook, TableProjection};
