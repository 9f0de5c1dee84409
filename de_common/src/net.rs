//! Default service address and URL construction.

/// Default port the Decision Engine server listens on.
pub const DEFAULT_PORT: &str = "8888";
/// Default hostname of the Decision Engine server.
pub const DEFAULT_HOST: &str = "localhost";

/// Builds the request target address like "http://host:port".
///
/// The port stays a string: it is captured verbatim from the command line
/// and only the server-facing URL needs it.
pub fn service_url(host: &str, port: &str) -> String {
    format!("http://{}:{}", host, port)
}
