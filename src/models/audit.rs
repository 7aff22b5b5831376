//! Audit result models.
//!
//! This module contains the [`AuditResult`] aggregate root and its
//! component records: per-month reconciliation statistics, the master
//! employee directory, year-level totals, and the processing log.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DetailedVacationRow, ExceptionRow};

/// Whether the extracted vacation count matched the management-reported
/// figure for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Extracted count equals the calculated count.
    Matched,
    /// Extracted count differs from the calculated count.
    Mismatch,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Matched => write!(f, "Matched"),
            MatchStatus::Mismatch => write!(f, "Mismatch"),
        }
    }
}

/// Reconciliation statistics for one processed roster file.
///
/// # Example
///
/// ```
/// use roster_audit::models::{MatchStatus, MonthlyAuditStats};
///
/// let stats = MonthlyAuditStats {
///     month: "MARCH 2025".to_string(),
///     actual_on_site_total: 500,
///     used_vacation_total: 470,
///     calculated_vacation_count: 30,
///     extracted_vacation_count: 30,
///     total_vacation_days: 185,
///     contract_shortfall: 61,
///     match_status: MatchStatus::Matched,
///     difference: 0,
/// };
/// assert_eq!(stats.difference, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAuditStats {
    /// The month label derived from the file name.
    pub month: String,
    /// Management-reported staff on site.
    pub actual_on_site_total: i64,
    /// Management-reported staff on vacation.
    pub used_vacation_total: i64,
    /// `actual_on_site_total - used_vacation_total`.
    pub calculated_vacation_count: i64,
    /// Distinct employees with at least one confirmed range this month.
    pub extracted_vacation_count: i64,
    /// Sum of confirmed vacation durations this month.
    pub total_vacation_days: i64,
    /// Contract headcount minus the reported figure (used vacation when
    /// nonzero, otherwise actual on site).
    pub contract_shortfall: i64,
    /// Whether extracted and calculated counts agree.
    pub match_status: MatchStatus,
    /// `extracted_vacation_count - calculated_vacation_count`.
    pub difference: i64,
}

/// Directory entry for one unique person across all processed files.
///
/// Keyed by identifier-or-name and overwritten, not merged, whenever the
/// same key reappears in a later-processed file. The entry therefore
/// reflects the most recently *processed* occurrence, which is not
/// necessarily the chronologically last month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterEmployee {
    /// The employee identifier; may be empty when keyed by name.
    pub identifier: String,
    /// The employee name.
    pub name: String,
    /// Location/ward, when present in the source sheet.
    pub location: String,
    /// Job position, when present in the source sheet.
    pub position: String,
    /// Month label of the file this entry was last refreshed from.
    pub last_seen_month: String,
    /// Sheet this entry was last refreshed from.
    pub source_sheet: String,
}

/// Year-level totals over the whole audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullYearTotals {
    /// Sum of monthly actual-on-site figures.
    pub total_actual_on_site: i64,
    /// Sum of monthly used-vacation figures.
    pub total_used_vacation: i64,
    /// Sum of monthly calculated vacation counts.
    pub total_calculated_vacation: i64,
    /// Distinct identifier-or-name keys across the entire detailed
    /// register. A person confirmed in two months counts once.
    pub total_confirmed_vacation: i64,
    /// Sum of monthly confirmed vacation days.
    pub total_vacation_days: i64,
    /// Total number of exception rows.
    pub total_exceptions: i64,
}

/// Severity of a processing log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSeverity {
    /// Routine progress information.
    Info,
    /// A structural skip or degraded default.
    Warning,
    /// A failure worth surfacing; processing still continues.
    Error,
}

/// One structured entry in the audit processing log.
///
/// Sheet-level entries carry extraction counts; skip entries carry a
/// human-readable reason instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingLog {
    /// The roster file the entry refers to.
    pub file_name: String,
    /// The sheet the entry refers to; empty for file-level entries.
    pub sheet_name: String,
    /// Entry severity.
    pub severity: LogSeverity,
    /// Human-readable message, when the entry is not a plain count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of header blocks located in the sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks_found: Option<u32>,
    /// Number of data rows retained from the sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_extracted: Option<u32>,
}

/// The aggregate result of one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Monthly summaries in chronological order.
    pub monthly_summaries: Vec<MonthlyAuditStats>,
    /// Every confirmed vacation instance, in processing order.
    pub detailed_register: Vec<DetailedVacationRow>,
    /// Every exception raised, in processing order.
    pub exception_report: Vec<ExceptionRow>,
    /// Deduplicated employee directory, keyed by identifier-or-name.
    pub master_employees: BTreeMap<String, MasterEmployee>,
    /// Year-level totals.
    pub full_year_totals: FullYearTotals,
    /// Structured processing log.
    pub logs: Vec<ProcessingLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_status_display() {
        assert_eq!(MatchStatus::Matched.to_string(), "Matched");
        assert_eq!(MatchStatus::Mismatch.to_string(), "Mismatch");
    }

    #[test]
    fn test_match_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::Matched).unwrap(),
            "\"matched\""
        );
        assert_eq!(
            serde_json::to_string(&MatchStatus::Mismatch).unwrap(),
            "\"mismatch\""
        );
    }

    #[test]
    fn test_processing_log_skips_absent_fields() {
        let entry = ProcessingLog {
            file_name: "roster.xlsx".to_string(),
            sheet_name: "Nursing".to_string(),
            severity: LogSeverity::Info,
            message: None,
            blocks_found: Some(1),
            rows_extracted: Some(42),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("message"));
        assert!(json.contains("\"rows_extracted\":42"));
        assert!(json.contains("\"severity\":\"info\""));
    }

    #[test]
    fn test_monthly_stats_round_trip() {
        let stats = MonthlyAuditStats {
            month: "JANUARY 2025".to_string(),
            actual_on_site_total: 512,
            used_vacation_total: 0,
            calculated_vacation_count: 512,
            extracted_vacation_count: 18,
            total_vacation_days: 121,
            contract_shortfall: 19,
            match_status: MatchStatus::Mismatch,
            difference: -494,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: MonthlyAuditStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
