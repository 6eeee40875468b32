//!
//! Common types shared by the quote fetcher library and its command-line client.
//!
//! This crate aggregates:
//! - `error` — the `FetchError` taxonomy returned by every fetch.
//! - `result` — handy `Result<T, FetchError>` alias.
//! - `quote` — the `Quote` record exchanged with the quote API.
//! - `net` — API path constants and URL helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use error::{BoxError, FetchError, FetchErrorKind};
pub use quote::Quote;
pub use result::Result;
