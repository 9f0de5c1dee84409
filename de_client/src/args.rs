//! Command-line arguments for the DE query tool.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use de_common::net::{DEFAULT_HOST, DEFAULT_PORT};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Product to query.
    #[clap(value_name = "product")]
    pub product: String,

    /// Possible formats are 'csv', 'json'.
    #[clap(long, value_name = "format")]
    pub format: Option<String>,

    /// Minimum start time for task managers (e.g. 2021-03-21 11:00:00).
    /// If omitted, searches only the current task manager.
    #[clap(long, value_name = "time")]
    pub since: Option<String>,

    /// Default port is 8888.
    #[clap(long, value_name = "port number", default_value = DEFAULT_PORT)]
    pub port: String,

    /// Default hostname is 'localhost'.
    #[clap(long, value_name = "hostname", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Include exception message in printout if server is inaccessible.
    #[clap(short, long)]
    pub verbose: bool,
}
