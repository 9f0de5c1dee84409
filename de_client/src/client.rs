//! RPC client for the Decision Engine server.
//!
//! This module wraps a blocking HTTP client around the single remote
//! operation the tool uses. One call maps to one POST of a JSON-RPC request
//! to `http://<host>:<port>`; there are no retries and no timeout overrides,
//! the transport's defaults govern how long the call can block.
use de_common::rpc::{RpcRequest, RpcResponse};
use de_common::{QueryError, Result};
use log::debug;
use reqwest::blocking::Client;

/// Client bound to one Decision Engine server address.
pub struct DeClient {
    http: Client,
    url: String,
}

impl DeClient {
    /// Creates a client for the given request target, e.g. `http://localhost:8888`.
    pub fn new(url: &str) -> Self {
        DeClient {
            http: Client::new(),
            url: String::from(url),
        }
    }

    /// Invokes `query_tool(product, format, since)` synchronously and
    /// returns the server's result verbatim.
    pub fn query_tool(
        &self,
        product: &str,
        format: Option<&str>,
        since: Option<&str>,
    ) -> Result<String> {
        let request = RpcRequest::query_tool(product, format, since);
        debug!("Sending {} request to {}", request.method, self.url);
        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(classify_transport)?;
        let body = response.text().map_err(classify_transport)?;
        let decoded: RpcResponse = serde_json::from_str(&body)?;
        decoded.into_result()
    }
}

/// Maps a transport error to `QueryError`. Connection and timeout failures
/// are connectivity problems; everything else while sending or reading the
/// reply counts as an invalid response from the server side.
fn classify_transport(err: reqwest::Error) -> QueryError {
    if err.is_connect() || err.is_timeout() {
        QueryError::Connectivity(err.to_string())
    } else {
        QueryError::InvalidResponse(err.to_string())
    }
}
