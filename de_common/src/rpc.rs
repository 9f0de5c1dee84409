//! JSON-RPC wire types for the `query_tool` call.
//!
//! The Decision Engine exposes a single remote operation,
//! `query_tool(product, format, since) -> string`. Requests and responses
//! are serialized with `serde_json`; absent optional parameters travel as
//! JSON `null`, so the transport permits nulls in both directions.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QueryError;

/// Protocol version stamped on every request.
pub const JSONRPC_VERSION: &str = "2.0";
/// Name of the single remote operation the tool invokes.
pub const QUERY_TOOL_METHOD: &str = "query_tool";

/// Request payload sent to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version. Always `2.0`.
    pub jsonrpc: String,
    /// Remote method name.
    pub method: String,
    /// Positional parameters; absent optionals are `null`.
    pub params: Vec<Value>,
    /// Request identifier echoed back by the server.
    pub id: u64,
}

impl RpcRequest {
    /// Creates a `query_tool` request carrying the exact parameter triple.
    pub fn query_tool(product: &str, format: Option<&str>, since: Option<&str>) -> Self {
        RpcRequest {
            jsonrpc: String::from(JSONRPC_VERSION),
            method: String::from(QUERY_TOOL_METHOD),
            params: vec![Value::from(product), nullable(format), nullable(since)],
            id: 1,
        }
    }
}

fn nullable(value: Option<&str>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

/// Fault object returned by the server in place of a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcFault {
    /// Numeric fault code.
    pub code: i64,
    /// Human-readable fault description.
    pub message: String,
}

/// Response payload received from the server.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    /// Result of the call, present on success.
    #[serde(default)]
    pub result: Option<Value>,
    /// Fault raised by the server, present on failure.
    #[serde(default)]
    pub error: Option<RpcFault>,
}

impl RpcResponse {
    /// Extracts the call result, mapping a server fault to `QueryError`.
    ///
    /// A string result is returned verbatim; any other JSON value is
    /// rendered as its JSON text. A reply carrying neither a result nor
    /// an error violates the protocol and is rejected.
    pub fn into_result(self) -> Result<String, QueryError> {
        if let Some(fault) = self.error {
            return Err(QueryError::Fault {
                code: fault.code,
                message: fault.message,
            });
        }
        match self.result {
            Some(Value::String(text)) => Ok(text),
            Some(other) => Ok(other.to_string()),
            None => Err(QueryError::InvalidResponse(String::from(
                "neither result nor error present",
            ))),
        }
    }
}
