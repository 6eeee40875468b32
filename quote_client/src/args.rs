//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote service, e.g. `http://127.0.0.1:8080`.
    /// Used as given; do not add a trailing slash.
    #[clap(long)]
    pub hostname: String,

    /// Subject to fetch a quote for. Appended to `/api/` without escaping.
    #[clap(long)]
    pub subject: String,

    /// Request timeout in seconds. Defaults to the HTTP client's own timeout.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Print the quote as JSON instead of plain text.
    #[clap(long)]
    pub json: bool,
}
