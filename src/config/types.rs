//! Configuration types for the roster audit engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The synonym and month
//! tables are data, not code: the engine receives them at construction
//! time so that deployments can adjust header vocabularies without
//! touching extraction logic.

use serde::Deserialize;
use std::collections::HashMap;

use crate::extraction::normalize;

/// Engine-wide audit settings from `audit.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSettings {
    /// Human-readable name of the audit programme.
    pub name: String,
    /// Version or fiscal-year tag of the configuration.
    pub version: String,
    /// The contractually obligated total staffing figure.
    pub contract_headcount: i64,
    /// Year assumed when a file name carries no 4-digit year token.
    pub default_year: i32,
    /// How many leading rows of a sheet are scanned for a header row.
    pub header_scan_rows: usize,
}

/// Column-role synonym table from `columns.yaml`.
///
/// Each role lists the accepted header-label variants in both supported
/// languages. Matching is containment on normalized text, so `"EMP NAME "`
/// and `"employee name"` both resolve the name role.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSynonyms {
    /// The label that identifies a name column by exact match.
    pub name_exact: String,
    /// Labels that win the name role even when a generic synonym already
    /// matched earlier in the same row (e.g. `NAME (ENG)`).
    pub name_preferred: Vec<String>,
    /// Name-column variants.
    pub name: Vec<String>,
    /// Identifier-column variants (badge, medical record, file number).
    pub identifier: Vec<String>,
    /// Remarks/comments-column variants.
    pub comments: Vec<String>,
    /// Position/title-column variants.
    pub position: Vec<String>,
    /// Location/ward-column variants.
    pub location: Vec<String>,
}

/// Raw month-name table as read from `months.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthsConfig {
    /// Month name or abbreviation to month number (1-12), both languages.
    pub months: HashMap<String, u32>,
}

/// Bilingual month-name lookup built from [`MonthsConfig`].
///
/// Names are normalized once at construction and ordered longest-first so
/// that full names match before their abbreviations ("MARCH" before
/// "MAR") when searching inside a file name.
#[derive(Debug, Clone)]
pub struct MonthTable {
    names_longest_first: Vec<(String, u32)>,
    by_name: HashMap<String, u32>,
}

impl MonthTable {
    /// Builds the lookup table from raw configuration.
    pub fn new(config: MonthsConfig) -> Self {
        let by_name: HashMap<String, u32> = config
            .months
            .iter()
            .map(|(name, num)| (normalize(name), *num))
            .collect();

        let mut names_longest_first: Vec<(String, u32)> =
            by_name.iter().map(|(n, v)| (n.clone(), *v)).collect();
        // Longest first, then lexicographic for a deterministic scan order.
        names_longest_first.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });

        Self {
            names_longest_first,
            by_name,
        }
    }

    /// True when the table contains no month names.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Finds the first month name contained in the given normalized text,
    /// checking longer names before shorter abbreviations.
    pub fn find_in(&self, normalized_text: &str) -> Option<(&str, u32)> {
        self.names_longest_first
            .iter()
            .find(|(name, _)| normalized_text.contains(name.as_str()))
            .map(|(name, num)| (name.as_str(), *num))
    }

    /// Looks up the month number for a name, normalizing the input.
    pub fn number_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(&normalize(name)).copied()
    }
}

/// Summary-sheet vocabulary from `summary.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarySynonyms {
    /// Exact name of the management summary sheet.
    pub sheet_name: String,
    /// Marker contained in the first cell of the totals row.
    pub total_row_marker: String,
    /// Header variants for the actual-on-site column.
    pub actual_on_site: Vec<String>,
    /// Header variants for the used-vacation column.
    pub used_vacation: Vec<String>,
}

/// The complete audit configuration.
///
/// Aggregates the settings and vocabulary tables loaded from the YAML
/// configuration directory. Tests construct this directly from fixture
/// tables; production code goes through
/// [`ConfigLoader`](super::ConfigLoader).
#[derive(Debug, Clone)]
pub struct AuditConfig {
    settings: AuditSettings,
    columns: ColumnSynonyms,
    months: MonthTable,
    summary: SummarySynonyms,
}

impl AuditConfig {
    /// Creates an AuditConfig from its component parts.
    pub fn new(
        settings: AuditSettings,
        columns: ColumnSynonyms,
        months: MonthsConfig,
        summary: SummarySynonyms,
    ) -> Self {
        Self {
            settings,
            columns,
            months: MonthTable::new(months),
            summary,
        }
    }

    /// Returns the audit settings.
    pub fn settings(&self) -> &AuditSettings {
        &self.settings
    }

    /// Returns the column-role synonym table.
    pub fn columns(&self) -> &ColumnSynonyms {
        &self.columns
    }

    /// Returns the month-name lookup table.
    pub fn months(&self) -> &MonthTable {
        &self.months
    }

    /// Returns the summary-sheet vocabulary.
    pub fn summary(&self) -> &SummarySynonyms {
        &self.summary
    }
}
