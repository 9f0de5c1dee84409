//! Command execution and failure formatting.
//!
//! Ties the parsed arguments to the one remote call and converts any failure
//! into a human-readable string. The caller always gets a single string
//! back, either the server's response or one of two message shapes:
//! connectivity failures carry a suggestion to check that the host and port
//! point at a running DE instance, anything else gets a generic framing.
use de_common::net::service_url;
use de_common::{QueryError, Result};
use log::debug;

use crate::args::Args;
use crate::client::DeClient;

/// Calls the proper remote function for the parsed arguments.
///
/// Delegates exactly the triple `(product, format, since)`, unchanged.
pub fn execute_command_from_args(args: &Args, client: &DeClient) -> Result<String> {
    client.query_tool(&args.product, args.format.as_deref(), args.since.as_deref())
}

/// Runs one query against the server addressed by `args` and returns the
/// output to print. Errors never propagate past this function.
pub fn run(args: &Args) -> String {
    let url = service_url(&args.host, &args.port);
    let client = DeClient::new(&url);
    match execute_command_from_args(args, &client) {
        Ok(output) => output,
        Err(e) => {
            debug!("query_tool call to {} failed: {}", url, e);
            format_failure(&url, &e, args.verbose)
        }
    }
}

/// Formats the user-facing message for a failed call.
pub fn format_failure(url: &str, error: &QueryError, verbose: bool) -> String {
    let mut msg = if error.is_connectivity() {
        format!(
            "An error occurred while trying to access a DE server at '{}'\n\
             Please ensure that the host and port names correspond to a running DE instance.",
            url
        )
    } else {
        format!(
            "An error occurred while trying to access a DE server at '{}'.",
            url
        )
    };
    if verbose {
        msg.push('\n');
        msg.push_str(&error.to_string());
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost:8888";

    #[test]
    fn connectivity_failure_suggests_checking_the_server() {
        let err = QueryError::Connectivity("connection refused".into());
        let msg = format_failure(URL, &err, false);
        assert_eq!(
            msg,
            "An error occurred while trying to access a DE server at 'http://localhost:8888'\n\
             Please ensure that the host and port names correspond to a running DE instance."
        );
    }

    #[test]
    fn connectivity_failure_verbose_appends_raw_error() {
        let err = QueryError::Connectivity("connection refused".into());
        let msg = format_failure(URL, &err, true);
        assert!(msg.ends_with("\nconnection refused"));
        assert!(msg.contains("running DE instance."));
    }

    #[test]
    fn unexpected_failure_has_generic_framing() {
        let err = QueryError::Fault {
            code: 1,
            message: "unknown product".into(),
        };
        let msg = format_failure(URL, &err, false);
        assert_eq!(
            msg,
            "An error occurred while trying to access a DE server at 'http://localhost:8888'."
        );
        assert!(!msg.contains("running DE instance"));
    }

    #[test]
    fn unexpected_failure_verbose_appends_raw_error() {
        let err = QueryError::InvalidResponse("neither result nor error present".into());
        let msg = format_failure(URL, &err, true);
        assert!(msg.ends_with("\ninvalid server response: neither result nor error present"));
    }
}
