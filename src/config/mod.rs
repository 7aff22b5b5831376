//! Configuration loading and management for the roster audit engine.
//!
//! The bilingual synonym tables (column roles, month names, summary-sheet
//! vocabulary) and audit settings are configuration data loaded from YAML
//! files, injected into the extraction code at construction time.
//!
//! # Example
//!
//! ```no_run
//! use roster_audit::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/roster").unwrap();
//! println!("Audit: {}", loader.config().settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AuditConfig, AuditSettings, ColumnSynonyms, MonthTable, MonthsConfig, SummarySynonyms,
};
