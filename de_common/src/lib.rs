//!
//! Common types shared by the Decision Engine query tooling.
//!
//! This crate aggregates:
//! - `error` — unified error type `QueryError` used across the workspace.
//! - `result` — handy `Result<T, QueryError>` alias.
//! - `net` — default service address and URL construction.
//! - `rpc` — JSON-RPC wire types for the `query_tool` call.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod net;
pub mod rpc;

pub use error::QueryError;
pub use result::Result;
