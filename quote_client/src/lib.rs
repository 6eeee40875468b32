//! Quote Client — fetches a single `Quote` from `<hostname>/api/<subject>`.
//!
//! The fetch pipeline is split into three pluggable collaborators so that each
//! step can be replaced for testing or extension:
//!
//! - `transport` — performs the GET and hands back a `Response`.
//! - `body` — drains the response body into bytes.
//! - `decoder` — turns the bytes into a `Quote`.
//!
//! `fetcher::QuoteFetcher` wires them together. Defaults are an HTTP client
//! (`reqwest`), `Read::read_to_end`, and `serde_json`.
//!
//! ```no_run
//! use quote_client::QuoteFetcher;
//!
//! let fetcher = QuoteFetcher::new("http://127.0.0.1:8080");
//! let quote = fetcher.fetch_quote("art")?;
//! println!("{}", quote);
//! # Ok::<(), quote_common::FetchError>(())
//! ```
#![warn(missing_docs)]
pub mod body;
pub mod decoder;
pub mod fetcher;
pub mod transport;

pub use body::{BodyReader, ReadToEnd};
pub use decoder::{Decoder, JsonDecoder};
pub use fetcher::{FetcherOption, QuoteFetcher, QuoteFetcherBuilder};
pub use transport::{HttpTransport, Response, Transport};
