//! Decoder collaborator: parses body bytes into a `Quote`.
use quote_common::{BoxError, Quote};

/// Turns a response body into a `Quote`.
pub trait Decoder: Send + Sync {
    /// Decodes `bytes` into a `Quote`.
    fn decode(&self, bytes: &[u8]) -> Result<Quote, BoxError>;
}

impl<F> Decoder for F
where
    F: Fn(&[u8]) -> Result<Quote, BoxError> + Send + Sync,
{
    fn decode(&self, bytes: &[u8]) -> Result<Quote, BoxError> {
        self(bytes)
    }
}

/// Default decoder using `serde_json`.
///
/// Unknown fields are ignored and missing fields become empty strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Quote, BoxError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
