//! Error types returned by a quote fetch.
//!
//! Every failure of the fetch pipeline maps to exactly one `FetchError` variant.
//! Collaborator failures keep the underlying error as the `source`.
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Boxed error produced by pluggable collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for the quote fetcher.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The underlying GET failed (network, DNS, connection refused, etc.).
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The transport reported neither an error nor a response.
    #[error("Transport returned no response")]
    NilResponse,

    /// The response status was not 200; carries the status description.
    #[error("Unexpected response status: {0}")]
    Status(String),

    /// The response body could not be fully read.
    #[error("Body read error: {0}")]
    BodyRead(#[source] BoxError),

    /// The body bytes could not be decoded into a `Quote`.
    #[error("Decode error: {0}")]
    Decode(#[source] BoxError),

    /// Failure while encoding a `Quote` with serde_json.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kind of a `FetchError`, without its payload.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FetchErrorKind {
    TransportError,
    NilResponseError,
    StatusError,
    BodyReadError,
    DecodeError,
    JsonError,
}

impl FetchError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::TransportError,
            FetchError::NilResponse => FetchErrorKind::NilResponseError,
            FetchError::Status(_) => FetchErrorKind::StatusError,
            FetchError::BodyRead(_) => FetchErrorKind::BodyReadError,
            FetchError::Decode(_) => FetchErrorKind::DecodeError,
            FetchError::Json(_) => FetchErrorKind::JsonError,
        }
    }
}
