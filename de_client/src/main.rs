//! DE Query Tool — a command-line client that queries a Decision Engine
//! server over RPC and prints the result.
//!
//! Usage example (CLI):
//! ```bash
//! de_query_tool vo_data --format csv --host de.example.org --port 8888
//! ```
//!
//! The tool issues a single synchronous `query_tool` call and prints either
//! the server's response or a formatted error message to stdout. Failures
//! are reported as printed text, not as non-zero exit codes.
use clap::Parser;
use de_client::args::Args;
use de_client::executor;

fn main() {
    init_logger();
    let args = Args::parse();
    println!("{}", executor::run(&args));
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
