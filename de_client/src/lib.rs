//! Query client for a Decision Engine (DE) server.
//!
//! The library side of the `de_query_tool` binary:
//! - `args` — command-line surface parsed with `clap`.
//! - `client` — the RPC client issuing the single `query_tool` call.
//! - `executor` — ties parsed arguments to the call and formats failures.
#![warn(missing_docs)]
pub mod args;
pub mod client;
pub mod executor;
