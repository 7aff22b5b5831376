//! Core data models for the roster audit engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod sheet;
mod vacation;

pub use audit::{
    AuditResult, FullYearTotals, LogSeverity, MasterEmployee, MatchStatus, MonthlyAuditStats,
    ProcessingLog,
};
pub use sheet::{CellValue, RosterFile, Sheet};
pub use vacation::{DetailedVacationRow, ExceptionRow, VacationRange};
