//! Quote Client — fetches one quote from a quote service and prints it to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --hostname http://127.0.0.1:8080 --subject art
//! quote_client --hostname http://127.0.0.1:8080 --subject art --json --timeout-secs 5
//! ```
//!
//! Log verbosity defaults to `info` and can be changed with `RUST_LOG`.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use quote_client::{HttpTransport, QuoteFetcher};
use quote_common::FetchError;
use quote_common::Result;
use std::time::Duration;

fn main() -> Result<(), FetchError> {
    init_logger();
    let args = Args::parse();

    let mut builder = QuoteFetcher::builder(&args.hostname);
    if let Some(secs) = args.timeout_secs {
        let transport = HttpTransport::with_timeout(Duration::from_secs(secs))
            .map_err(|e| FetchError::Transport(Box::new(e)))?;
        builder = builder.with_transport(transport);
    }
    let fetcher = builder.build();

    info!("Requesting a quote on '{}' from {}", args.subject, fetcher.hostname());
    let quote = match fetcher.fetch_quote(&args.subject) {
        Ok(quote) => quote,
        Err(e) => {
            error!("{}: {}", e.kind(), e);
            return Err(e);
        }
    };

    if args.json {
        println!("{}", String::from_utf8_lossy(&quote.to_json_bytes()?));
    } else {
        println!("{}", quote);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
