//! Flat table projections for workbook-style export.
//!
//! The engine does not encode spreadsheet binaries; it projects the audit
//! result into uniformly-shaped named tables that a client-side writer
//! can serialize in whatever format it likes.

use serde::{Deserialize, Serialize};

use crate::models::{AuditResult, DetailedVacationRow};

/// One named table with a fixed column set and stringly-typed rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableProjection {
    /// The table (sheet) name.
    pub name: String,
    /// Column headers, in order.
    pub columns: Vec<String>,
    /// Data rows; every row has exactly `columns.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl TableProjection {
    fn new(name: &str, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

/// Projects a full audit result into its four standard export tables.
///
/// Tables appear in a fixed order: Executive Summary, Confirmed
/// Vacations, Exceptions, All Employees. Register and exception rows keep
/// their processing order; employees are listed in key order.
pub fn audit_workbook(result: &AuditResult) -> Vec<TableProjection> {
    let summary = TableProjection::new(
        "Executive Summary",
        &[
            "Month",
            "Actual On Site",
            "Used Vacation",
            "Calculated Count",
            "Extracted Count",
            "Total Days",
            "Shortfall",
            "Status",
            "Difference",
        ],
        result
            .monthly_summaries
            .iter()
            .map(|s| {
                vec![
                    s.month.clone(),
                    s.actual_on_site_total.to_string(),
                    s.used_vacation_total.to_string(),
                    s.calculated_vacation_count.to_string(),
                    s.extracted_vacation_count.to_string(),
                    s.total_vacation_days.to_string(),
                    s.contract_shortfall.to_string(),
                    s.match_status.to_string(),
                    s.difference.to_string(),
                ]
            })
            .collect(),
    );

    let register = register_table("Confirmed Vacations", &result.detailed_register);

    let exceptions = TableProjection::new(
        "Exceptions",
        &[
            "Month",
            "Identifier",
            "Name",
            "Location",
            "Sheet",
            "Problem",
            "Comments",
        ],
        result
            .exception_report
            .iter()
            .map(|e| {
                vec![
                    e.month.clone(),
                    e.identifier.clone(),
                    e.name.clone(),
                    e.location.clone(),
                    e.sheet_name.clone(),
                    e.problem_type.clone(),
                    e.original_comments.clone(),
                ]
            })
            .collect(),
    );

    let employees = TableProjection::new(
        "All Employees",
        &[
            "Identifier",
            "Name",
            "Location",
            "Position",
            "Last Seen Month",
            "Source Sheet",
        ],
        result
            .master_employees
            .values()
            .map(|e| {
                vec![
                    e.identifier.clone(),
                    e.name.clone(),
                    e.location.clone(),
                    e.position.clone(),
                    e.last_seen_month.clone(),
                    e.source_sheet.clone(),
                ]
            })
            .collect(),
    );

    vec![summary, register, exceptions, employees]
}

/// Projects the detailed register alone, for the yearly records export.
pub fn vacation_register_workbook(register: &[DetailedVacationRow]) -> TableProjection {
    register_table("Yearly Vacation Records", register)
}

fn register_table(name: &str, register: &[DetailedVacationRow]) -> TableProjection {
    TableProjection::new(
        name,
        &[
            "Month",
            "Identifier",
            "Name",
            "Location",
            "Sheet",
            "Start Date",
            "End Date",
            "Duration",
            "Comments",
        ],
        register
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    r.identifier.clone(),
                    r.name.clone(),
                    r.location.clone(),
                    r.sheet_name.clone(),
                    r.start_date.to_string(),
                    r.end_date.to_string(),
                    r.duration.to_string(),
                    r.original_comments.clone(),
                ]
            })
            .collect(),
    )
}
