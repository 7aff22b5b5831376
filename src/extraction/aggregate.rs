//! Multi-file aggregation into a year-wide audit result.
//!
//! Files are reconciled one at a time in the order the caller supplies
//! them, then the per-file outcomes are merged: registers and logs
//! append, the master employee directory applies updates last-write-wins,
//! and the monthly summaries are sorted chronologically at the end so the
//! supplied order never leaks into the report.

use std::collections::{BTreeMap, HashSet};

use tracing::info;

use crate::config::AuditConfig;
use crate::error::EngineResult;
use crate::models::{AuditResult, FullYearTotals, MasterEmployee, RosterFile};

use super::dates::DateRangeExtractor;
use super::month::month_sort_key;
use super::reconcile::reconcile_file;

/// Runs the full audit over a batch of roster files.
///
/// Files are processed in the given order. Where the same employee key
/// appears in more than one file, the directory entry from the
/// last-processed file wins. `total_confirmed_vacation` counts distinct
/// people across the whole register, so an employee on leave in two
/// months is one confirmed person for the year but two in the monthly
/// counts.
pub fn run_audit(files: &[RosterFile], config: &AuditConfig) -> EngineResult<AuditResult> {
    let extractor = DateRangeExtractor::new()?;

    let mut summaries = Vec::with_capacity(files.len());
    let mut register = Vec::new();
    let mut exceptions = Vec::new();
    let mut logs = Vec::new();
    // Keyed map keeps the directory deterministic regardless of the
    // hashing seed; output iterates in key order.
    let mut employees: BTreeMap<String, MasterEmployee> = BTreeMap::new();

    for file in files {
        let outcome = reconcile_file(file, config, &extractor);
        info!(
            file = %file.file_name,
            month = %outcome.summary.month,
            rows = outcome.detail_rows.len(),
            exceptions = outcome.exceptions.len(),
            "roster file reconciled"
        );

        for update in outcome.employee_updates {
            employees.insert(update.key, update.employee);
        }
        register.extend(outcome.detail_rows);
        exceptions.extend(outcome.exceptions);
        logs.extend(outcome.logs);
        summaries.push(outcome.summary);
    }

    let months = config.months();
    let default_year = config.settings().default_year;
    summaries.sort_by_key(|s| month_sort_key(&s.month, months, default_year));

    let confirmed: HashSet<&str> = register.iter().map(|row| row.person_key()).collect();
    let totals = FullYearTotals {
        total_actual_on_site: summaries.iter().map(|s| s.actual_on_site_total).sum(),
        total_used_vacation: summaries.iter().map(|s| s.used_vacation_total).sum(),
        total_calculated_vacation: summaries.iter().map(|s| s.calculated_vacation_count).sum(),
        total_confirmed_vacation: confirmed.len() as i64,
        total_vacation_days: summaries.iter().map(|s| s.total_vacation_days).sum(),
        total_exceptions: exceptions.len() as i64,
    };

    Ok(AuditResult {
        monthly_summaries: summaries,
        detailed_register: register,
        exception_report: exceptions,
        master_employees: employees,
        full_year_totals: totals,
        logs,
    })
}
