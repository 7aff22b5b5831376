//! Per-file reconciliation.
//!
//! One roster file is reconciled in isolation: the month label is derived
//! from the file name, the summary sheet yields the reported figures, and
//! every content sheet is walked for employees and vacation remarks. The
//! result is a self-contained [`FileOutcome`] that the aggregator merges
//! in caller-supplied file order, so this function stays pure and safe to
//! run concurrently if a caller ever chooses to.

use std::collections::HashSet;

use crate::config::AuditConfig;
use crate::models::{
    CellValue, DetailedVacationRow, ExceptionRow, LogSeverity, MasterEmployee, MatchStatus,
    MonthlyAuditStats, ProcessingLog, RosterFile,
};

use super::dates::DateRangeExtractor;
use super::header::resolve_header;
use super::month::month_label;
use super::summary::extract_summary_totals;

/// One keyed refresh of the master employee directory.
///
/// Updates are applied by the aggregator in row order, last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    /// The identifier-or-name key.
    pub key: String,
    /// The directory entry as seen in this file.
    pub employee: MasterEmployee,
}

/// Everything extracted from one roster file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// The month's reconciliation statistics.
    pub summary: MonthlyAuditStats,
    /// Confirmed vacation rows, in sheet/row order.
    pub detail_rows: Vec<DetailedVacationRow>,
    /// Exception rows, in sheet/row order.
    pub exceptions: Vec<ExceptionRow>,
    /// Master-directory refreshes, in sheet/row order.
    pub employee_updates: Vec<EmployeeUpdate>,
    /// Per-sheet processing log entries.
    pub logs: Vec<ProcessingLog>,
}

/// Reconciles one roster file against its reported figures.
///
/// Pure with respect to its inputs: all accumulation happens in the
/// returned [`FileOutcome`]. Sheets without a resolvable name column and
/// rows with an empty name cell are skipped silently (the former leaves a
/// warning in the processing log). Remarks run through the date-range
/// extractor; each confirmed range becomes a detail row, and a remark
/// with date-like tokens but no valid range becomes one exception row.
pub fn reconcile_file(
    file: &RosterFile,
    config: &AuditConfig,
    extractor: &DateRangeExtractor,
) -> FileOutcome {
    let settings = config.settings();
    let label = month_label(&file.file_name, config.months(), settings.default_year);

    let mut detail_rows = Vec::new();
    let mut exceptions = Vec::new();
    let mut employee_updates = Vec::new();
    let mut logs = Vec::new();

    let mut confirmed: HashSet<String> = HashSet::new();
    let mut total_vacation_days: i64 = 0;

    // Management summary figures.
    let summary_sheet = file.sheet(&config.summary().sheet_name);
    let totals = match summary_sheet {
        Some(sheet) => {
            let totals = extract_summary_totals(sheet, config.summary(), settings.header_scan_rows);
            logs.push(ProcessingLog {
                file_name: file.file_name.clone(),
                sheet_name: sheet.name.clone(),
                severity: LogSeverity::Info,
                message: Some(format!(
                    "reported figures: actual on site {}, used vacation {}",
                    totals.actual_on_site, totals.used_vacation
                )),
                blocks_found: None,
                rows_extracted: None,
            });
            totals
        }
        None => {
            logs.push(ProcessingLog {
                file_name: file.file_name.clone(),
                sheet_name: config.summary().sheet_name.clone(),
                severity: LogSeverity::Warning,
                message: Some("summary sheet not found; reported figures default to 0".to_string()),
                blocks_found: None,
                rows_extracted: None,
            });
            Default::default()
        }
    };

    // Content sheets: everything that is not the summary sheet.
    for sheet in file
        .sheets
        .iter()
        .filter(|s| s.name != config.summary().sheet_name)
    {
        let Some(resolution) = resolve_header(sheet, config.columns(), settings.header_scan_rows)
        else {
            logs.push(ProcessingLog {
                file_name: file.file_name.clone(),
                sheet_name: sheet.name.clone(),
                severity: LogSeverity::Warning,
                message: Some(format!(
                    "no name column in first {} rows; sheet skipped",
                    settings.header_scan_rows
                )),
                blocks_found: Some(0),
                rows_extracted: Some(0),
            });
            continue;
        };

        let cols = resolution.columns;
        let mut rows_extracted: u32 = 0;

        for row in sheet.rows.iter().skip(resolution.header_row + 1) {
            let name = cell_text(row, cols.name);
            if name.is_empty() {
                continue;
            }

            let identifier = cell_text(row, cols.identifier);
            let comments = cell_text(row, cols.comments);
            let location = cell_text(row, cols.location);
            let position = cell_text(row, cols.position);

            let key = if identifier.is_empty() {
                name.clone()
            } else {
                identifier.clone()
            };

            employee_updates.push(EmployeeUpdate {
                key: key.clone(),
                employee: MasterEmployee {
                    identifier: identifier.clone(),
                    name: name.clone(),
                    location: location.clone(),
                    position,
                    last_seen_month: label.clone(),
                    source_sheet: sheet.name.clone(),
                },
            });
            rows_extracted += 1;

            if comments.is_empty() {
                continue;
            }

            let extraction = extractor.extract(&comments);
            if !extraction.ranges.is_empty() {
                confirmed.insert(key);
                for range in extraction.ranges {
                    total_vacation_days += range.duration;
                    detail_rows.push(DetailedVacationRow {
                        month: label.clone(),
                        identifier: identifier.clone(),
                        name: name.clone(),
                        location: location.clone(),
                        sheet_name: sheet.name.clone(),
                        start_date: range.start_date,
                        end_date: range.end_date,
                        duration: range.duration,
                        original_comments: comments.clone(),
                    });
                }
            } else if !extraction.problems.is_empty() {
                exceptions.push(ExceptionRow {
                    month: label.clone(),
                    identifier: identifier.clone(),
                    name: name.clone(),
                    location: location.clone(),
                    sheet_name: sheet.name.clone(),
                    problem_type: extraction
                        .problems
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                    original_comments: comments.clone(),
                });
            }
        }

        logs.push(ProcessingLog {
            file_name: file.file_name.clone(),
            sheet_name: sheet.name.clone(),
            severity: LogSeverity::Info,
            message: None,
            blocks_found: Some(1),
            rows_extracted: Some(rows_extracted),
        });
    }

    let calculated = totals.actual_on_site - totals.used_vacation;
    let extracted = confirmed.len() as i64;
    let difference = extracted - calculated;
    let contract_shortfall = if totals.used_vacation != 0 {
        settings.contract_headcount - totals.used_vacation
    } else {
        settings.contract_headcount - totals.actual_on_site
    };

    FileOutcome {
        summary: MonthlyAuditStats {
            month: label,
            actual_on_site_total: totals.actual_on_site,
            used_vacation_total: totals.used_vacation,
            calculated_vacation_count: calculated,
            extracted_vacation_count: extracted,
            total_vacation_days,
            contract_shortfall,
            match_status: if difference == 0 {
                MatchStatus::Matched
            } else {
                MatchStatus::Mismatch
            },
            difference,
        },
        detail_rows,
        exceptions,
        employee_updates,
        logs,
    }
}

/// Reads an optional column from a row as trimmed text.
///
/// Missing columns, short rows, and empty cells all read as `""`.
fn cell_text(row: &[CellValue], col: Option<usize>) -> String {
    col.and_then(|c| row.get(c))
        .map(|cell| cell.as_text().trim().to_string())
        .unwrap_or_default()
}
