//! Transport collaborator: performs the HTTP GET.
//!
//! A `Transport` returns `Ok(Some(response))` on a completed exchange (whatever
//! the status), `Err(_)` when the request itself failed, and `Ok(None)` only if
//! it is misbehaving. The fetcher treats the last case as an error of its own.
use std::fmt;
use std::io::{Cursor, Read};
use std::time::Duration;

use log::debug;
use quote_common::BoxError;
use reqwest::blocking::Client;

/// Response handle produced by a `Transport`.
pub struct Response {
    status: u16,
    status_text: String,
    body: Box<dyn Read + Send>,
}

impl Response {
    /// Creates a response with a streaming body.
    ///
    /// `status_text` is the human-readable status description, e.g. `"400 Bad Request"`.
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Read + Send + 'static) -> Self {
        Response {
            status,
            status_text: status_text.into(),
            body: Box::new(body),
        }
    }

    /// Creates a response whose body is an in-memory buffer.
    pub fn from_bytes(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Response::new(status, status_text, Cursor::new(body.into()))
    }

    /// Numeric status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human-readable status description.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Returns `true` for `200 OK` only.
    pub fn is_ok(&self) -> bool {
        self.status == quote_common::net::STATUS_OK
    }

    /// Consumes the response, returning its body stream.
    pub fn into_body(self) -> Box<dyn Read + Send> {
        self.body
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .finish_non_exhaustive()
    }
}

/// Performs a GET request for a URL.
pub trait Transport: Send + Sync {
    /// Sends a GET to `url`.
    fn get(&self, url: &str) -> Result<Option<Response>, BoxError>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<Option<Response>, BoxError> + Send + Sync,
{
    fn get(&self, url: &str) -> Result<Option<Response>, BoxError> {
        self(url)
    }
}

/// Default transport backed by a blocking `reqwest` client.
///
/// Connection pooling and TLS are handled by the client; the client is safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with reqwest's default client settings.
    pub fn new() -> Self {
        HttpTransport {
            client: Client::new(),
        }
    }

    /// Creates a transport whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        HttpTransport { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Option<Response>, BoxError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!("GET {} -> {}", url, status);
        Ok(Some(Response::new(status.as_u16(), status.to_string(), response)))
    }
}
