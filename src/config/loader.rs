//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading audit
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AuditConfig, AuditSettings, ColumnSynonyms, MonthsConfig, SummarySynonyms};

/// Loads and provides access to the audit configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the aggregated [`AuditConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/roster/
/// ├── audit.yaml    # Contract headcount, default year, scan window
/// ├── columns.yaml  # Column-role synonym table (bilingual)
/// ├── months.yaml   # Month names and abbreviations (bilingual)
/// └── summary.yaml  # Summary-sheet vocabulary
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster").unwrap();
/// assert!(loader.config().settings().contract_headcount > 0);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/roster")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A loaded table is unusable (e.g. empty month table)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<AuditSettings>(&path.join("audit.yaml"))?;
        let columns = Self::load_yaml::<ColumnSynonyms>(&path.join("columns.yaml"))?;
        let months = Self::load_yaml::<MonthsConfig>(&path.join("months.yaml"))?;
        let summary = Self::load_yaml::<SummarySynonyms>(&path.join("summary.yaml"))?;

        Self::validate(&settings, &columns, &months, &summary)?;

        Ok(Self {
            config: AuditConfig::new(settings, columns, months, summary),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects configurations the engine cannot run with.
    fn validate(
        settings: &AuditSettings,
        columns: &ColumnSynonyms,
        months: &MonthsConfig,
        summary: &SummarySynonyms,
    ) -> EngineResult<()> {
        if settings.header_scan_rows == 0 {
            return Err(EngineError::InvalidConfig {
                message: "header_scan_rows must be at least 1".to_string(),
            });
        }
        if columns.name.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "columns.name synonym list is empty".to_string(),
            });
        }
        if months.months.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "month table is empty".to_string(),
            });
        }
        if summary.sheet_name.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "summary.sheet_name is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying audit configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/roster"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let settings = loader.config().settings();
        assert_eq!(settings.contract_headcount, 531);
        assert_eq!(settings.default_year, 2025);
        assert_eq!(settings.header_scan_rows, 50);
    }

    #[test]
    fn test_month_table_loaded_bilingual() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let months = loader.config().months();
        assert_eq!(months.number_of("JANUARY"), Some(1));
        assert_eq!(months.number_of("DEC"), Some(12));
        assert_eq!(months.number_of("يناير"), Some(1));
    }

    #[test]
    fn test_summary_vocabulary_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let summary = loader.config().summary();
        assert_eq!(summary.sheet_name, "Table 1");
        assert_eq!(summary.total_row_marker, "TOTAL=");
        assert!(!summary.actual_on_site.is_empty());
        assert!(!summary.used_vacation.is_empty());
    }

    #[test]
    fn test_column_synonyms_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let columns = loader.config().columns();
        assert!(columns.name.iter().any(|s| s == "FULL NAME"));
        assert!(columns.identifier.iter().any(|s| s == "MRN"));
        assert_eq!(columns.name_exact, "NAME");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("audit.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
