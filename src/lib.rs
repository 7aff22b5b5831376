//! Roster Vacation Audit Engine
//!
//! This crate reconciles monthly staff-roster spreadsheets against a
//! contractual headcount. It locates variably-positioned header rows inside
//! loosely structured sheet grids, mines free-text remarks for vacation
//! date ranges, deduplicates employees across monthly snapshots, and
//! computes per-month and annual reconciliation statistics with a
//! pass/fail match status.
//!
//! The engine consumes a two-dimensional grid of untyped cell values per
//! sheet; reading spreadsheet binary formats and rendering PDF reports are
//! the caller's concern. The [`export`] module provides the flat table and
//! report-document shapes those writers consume.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod models;
