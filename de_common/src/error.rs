//! Error types shared between the query tool crates.
//!
//! The `QueryError` enum unifies the failure cases of a `query_tool` call:
//! transport-level I/O problems, faults reported by the server, and replies
//! the client cannot decode. The executor only distinguishes connectivity
//! failures from everything else when formatting user-facing output, so the
//! enum exposes that split via [`QueryError::is_connectivity`].
use thiserror::Error;

/// Unified error type for a Decision Engine query.
#[derive(Error, Debug)]
pub enum QueryError {
    /// OS-level I/O failure while reaching the server (connection refused,
    /// DNS resolution, timeout).
    #[error("{0}")]
    Connectivity(String),

    /// Error object returned by the server inside a well-formed RPC reply.
    #[error("server fault {code}: {message}")]
    Fault {
        /// Numeric fault code assigned by the server.
        code: i64,
        /// Human-readable fault description from the server.
        message: String,
    },

    /// Reply that could not be decoded or violates the expected shape
    /// (e.g., neither a result nor an error present).
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryError {
    /// Returns `true` for transport-level failures, where the user should be
    /// told to check that the host and port point at a running DE instance.
    /// Every other variant counts as an unexpected failure.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, QueryError::Connectivity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_is_classified() {
        let err = QueryError::Connectivity("connection refused".into());
        assert!(err.is_connectivity());
    }

    #[test]
    fn fault_and_invalid_response_are_unexpected() {
        let fault = QueryError::Fault {
            code: -32601,
            message: "method not found".into(),
        };
        let invalid = QueryError::InvalidResponse("missing result".into());
        assert!(!fault.is_connectivity());
        assert!(!invalid.is_connectivity());
    }

    #[test]
    fn fault_display_includes_code_and_message() {
        let fault = QueryError::Fault {
            code: 1,
            message: "unknown product".into(),
        };
        assert_eq!(fault.to_string(), "server fault 1: unknown product");
    }
}
