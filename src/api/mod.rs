//! HTTP API module for the roster audit engine.
//!
//! This module provides the REST API endpoint for reconciling a batch
//! of decoded roster files.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AuditRequest, RosterFileRequest, SheetRequest};
pub use response::ApiError;
pub use state::AppState;
