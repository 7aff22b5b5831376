//! Paginated report documents.
//!
//! Two management-facing reports are projected from the audit result: a
//! one-page monthly reconciliation summary and a multi-page board report
//! with year-level KPIs. Like the workbook projection these are data-only
//! shapes; rendering (PDF, HTML) is a client concern. `generated_at` is
//! supplied by the caller so identical inputs always produce identical
//! documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AuditConfig;
use crate::extraction::month_sort_key;
use crate::models::{AuditResult, MonthlyAuditStats};

use super::workbook::TableProjection;

/// A numbered report page holding one or more tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPage {
    /// 1-based page number.
    pub page_number: u32,
    /// The page heading.
    pub title: String,
    /// Tables on this page, top to bottom.
    pub tables: Vec<TableProjection>,
}

/// A complete report ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Document title.
    pub title: String,
    /// The audience line printed under the title.
    pub prepared_for: String,
    /// Generation timestamp, caller-supplied.
    pub generated_at: DateTime<Utc>,
    /// Footer line repeated on every page.
    pub footer: String,
    /// Pages in order.
    pub pages: Vec<ReportPage>,
}

/// Builds the monthly reconciliation summary report.
///
/// One page, one table, months in chronological order regardless of the
/// order of `summaries`.
pub fn reconciliation_report(
    summaries: &[MonthlyAuditStats],
    config: &AuditConfig,
    generated_at: DateTime<Utc>,
) -> ReportDocument {
    let settings = config.settings();
    let table = TableProjection {
        name: "Monthly Reconciliation".to_string(),
        columns: [
            "Month",
            "Actual",
            "Used",
            "Vac. Count",
            "Total Days",
            "Shortfall",
            "Status",
            "Variance",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
        rows: sorted_by_month(summaries, config)
            .iter()
            .map(|s| {
                vec![
                    s.month.clone(),
                    s.actual_on_site_total.to_string(),
                    s.used_vacation_total.to_string(),
                    s.extracted_vacation_count.to_string(),
                    s.total_vacation_days.to_string(),
                    s.contract_shortfall.to_string(),
                    s.match_status.to_string(),
                    s.difference.to_string(),
                ]
            })
            .collect(),
    };

    ReportDocument {
        title: "Monthly Reconciliation Summary".to_string(),
        prepared_for: settings.name.clone(),
        generated_at,
        footer: format!("Fiscal Year {} Audit", settings.version),
        pages: vec![ReportPage {
            page_number: 1,
            title: "Monthly Reconciliation Summary".to_string(),
            tables: vec![table],
        }],
    }
}

/// Builds the annual board vacation report.
///
/// Page 1 carries the KPI table and monthly leave participation against
/// the contract headcount; page 2 lists every individual leave record in
/// chronological month order with names uppercased.
pub fn board_report(
    result: &AuditResult,
    config: &AuditConfig,
    generated_at: DateTime<Utc>,
) -> ReportDocument {
    let settings = config.settings();
    let summaries = sorted_by_month(&result.monthly_summaries, config);

    let confirmed = result.full_year_totals.total_confirmed_vacation;
    let month_count = summaries.len().max(1) as i64;
    let average_participation = ((confirmed as f64) / (month_count as f64)).round() as i64;

    let employee_count = result.master_employees.len().max(1) as i64;
    let exception_share = (result.exception_report.len() as f64 / employee_count as f64) * 100.0;
    let integrity_score = (100 - exception_share.round() as i64).max(0);

    let kpis = TableProjection {
        name: "Executive Summary & KPIs".to_string(),
        columns: vec![
            "Key Performance Indicator".to_string(),
            "Value".to_string(),
        ],
        rows: vec![
            vec![
                "Total Unique Employees with Leave".to_string(),
                confirmed.to_string(),
            ],
            vec![
                "Average Monthly Participation".to_string(),
                format!("{average_participation} Staff/Month"),
            ],
            vec![
                "Data Integrity Score".to_string(),
                format!("{integrity_score}%"),
            ],
        ],
    };

    let contract = settings.contract_headcount;
    let participation = TableProjection {
        name: "Monthly Leave Participation".to_string(),
        columns: vec![
            "Reporting Month".to_string(),
            "Employee Count (Took Leave)".to_string(),
            format!("Percentage of Contract ({contract})"),
        ],
        rows: summaries
            .iter()
            .map(|s| {
                let pct = (s.extracted_vacation_count as f64 / contract as f64) * 100.0;
                vec![
                    s.month.clone(),
                    format!("{} Employees", s.extracted_vacation_count),
                    format!("{pct:.1}%"),
                ]
            })
            .collect(),
    };

    let mut register: Vec<_> = result.detailed_register.iter().collect();
    register.sort_by_key(|r| {
        month_sort_key(&r.month, config.months(), settings.default_year)
    });
    let records = TableProjection {
        name: "Individual Leave Records".to_string(),
        columns: [
            "Month",
            "Staff Name",
            "Identifier",
            "Start Date",
            "End Date",
            "Duration",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
        rows: register
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    r.name.to_uppercase(),
                    r.identifier.clone(),
                    r.start_date.to_string(),
                    r.end_date.to_string(),
                    format!("{} Days", r.duration),
                ]
            })
            .collect(),
    };

    ReportDocument {
        title: "Annual Vacation Report".to_string(),
        prepared_for: settings.name.clone(),
        generated_at,
        footer: format!("{} | Fiscal Year {}", settings.name, settings.version),
        pages: vec![
            ReportPage {
                page_number: 1,
                title: "Executive Summary & KPIs".to_string(),
                tables: vec![kpis, participation],
            },
            ReportPage {
                page_number: 2,
                title: "Individual Leave Records".to_string(),
                tables: vec![records],
            },
        ],
    }
}

fn sorted_by_month(
    summaries: &[MonthlyAuditStats],
    config: &AuditConfig,
) -> Vec<MonthlyAuditStats> {
    let mut sorted = summaries.to_vec();
    sorted.sort_by_key(|s| {
        month_sort_key(&s.month, config.months(), config.settings().default_year)
    });
    sorted
}
