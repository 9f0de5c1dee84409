//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `QueryError`, so functions can simply return `Result<T>`.
use crate::error::QueryError;

/// Workspace-wide `Result` alias with `QueryError` as the default error.
pub type Result<T, E = QueryError> = std::result::Result<T, E>;
