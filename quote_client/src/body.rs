//! BodyReader collaborator: drains a response body into bytes.
use std::io::Read;

use quote_common::BoxError;

/// Reads a response body stream to its end.
pub trait BodyReader: Send + Sync {
    /// Reads all of `body`, failing if the stream errors before its end.
    fn read_body(&self, body: &mut dyn Read) -> Result<Vec<u8>, BoxError>;
}

impl<F> BodyReader for F
where
    F: Fn(&mut dyn Read) -> Result<Vec<u8>, BoxError> + Send + Sync,
{
    fn read_body(&self, body: &mut dyn Read) -> Result<Vec<u8>, BoxError> {
        self(body)
    }
}

/// Default body reader built on `Read::read_to_end`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadToEnd;

impl BodyReader for ReadToEnd {
    fn read_body(&self, body: &mut dyn Read) -> Result<Vec<u8>, BoxError> {
        let mut buf = Vec::new();
        body.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
