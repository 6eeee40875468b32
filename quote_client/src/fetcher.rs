//! `QuoteFetcher`: the GET → status → body → decode pipeline.
//!
//! Collaborators are chosen at construction time, either through an ordered list
//! of `FetcherOption`s or through `QuoteFetcherBuilder`. Options are applied in
//! order, so a later option replaces an earlier one for the same collaborator.
use std::fmt;
use std::io::Read;

use log::{debug, warn};
use quote_common::net::quote_url;
use quote_common::{BoxError, FetchError, Quote, Result};

use crate::body::{BodyReader, ReadToEnd};
use crate::decoder::{Decoder, JsonDecoder};
use crate::transport::{HttpTransport, Response, Transport};

/// Replacement for one of the fetcher's collaborators.
pub enum FetcherOption {
    /// Replaces the GET implementation.
    Transport(Box<dyn Transport>),
    /// Replaces the body consumption step.
    BodyReader(Box<dyn BodyReader>),
    /// Replaces the deserialization step.
    Decoder(Box<dyn Decoder>),
}

impl FetcherOption {
    /// Option replacing the transport.
    pub fn transport(transport: impl Transport + 'static) -> Self {
        FetcherOption::Transport(Box::new(transport))
    }

    /// Option replacing the transport with a closure.
    pub fn transport_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<Option<Response>, BoxError> + Send + Sync + 'static,
    {
        FetcherOption::Transport(Box::new(f))
    }

    /// Option replacing the body reader.
    pub fn body_reader(reader: impl BodyReader + 'static) -> Self {
        FetcherOption::BodyReader(Box::new(reader))
    }

    /// Option replacing the body reader with a closure.
    pub fn body_reader_fn<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Read) -> std::result::Result<Vec<u8>, BoxError> + Send + Sync + 'static,
    {
        FetcherOption::BodyReader(Box::new(f))
    }

    /// Option replacing the decoder.
    pub fn decoder(decoder: impl Decoder + 'static) -> Self {
        FetcherOption::Decoder(Box::new(decoder))
    }

    /// Option replacing the decoder with a closure.
    pub fn decoder_fn<F>(f: F) -> Self
    where
        F: Fn(&[u8]) -> std::result::Result<Quote, BoxError> + Send + Sync + 'static,
    {
        FetcherOption::Decoder(Box::new(f))
    }
}

impl fmt::Debug for FetcherOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetcherOption::Transport(_) => "Transport",
            FetcherOption::BodyReader(_) => "BodyReader",
            FetcherOption::Decoder(_) => "Decoder",
        };
        f.write_str(name)
    }
}

/// Fetches quotes from `<hostname>/api/<subject>`.
///
/// Holds no per-call state, so one fetcher can serve any number of calls,
/// including concurrent ones from several threads.
pub struct QuoteFetcher {
    hostname: String,
    transport: Box<dyn Transport>,
    body_reader: Box<dyn BodyReader>,
    decoder: Box<dyn Decoder>,
}

impl QuoteFetcher {
    /// Creates a fetcher with the default collaborators.
    ///
    /// The hostname is used as given: no validation, no trailing-slash handling.
    pub fn new(hostname: &str) -> Self {
        Self::builder(hostname).build()
    }

    /// Creates a fetcher, applying `options` in order on top of the defaults.
    pub fn with_options<I>(hostname: &str, options: I) -> Self
    where
        I: IntoIterator<Item = FetcherOption>,
    {
        options
            .into_iter()
            .fold(Self::builder(hostname), QuoteFetcherBuilder::option)
            .build()
    }

    /// Starts a builder for the given hostname.
    pub fn builder(hostname: &str) -> QuoteFetcherBuilder {
        QuoteFetcherBuilder {
            hostname: String::from(hostname),
            transport: None,
            body_reader: None,
            decoder: None,
        }
    }

    /// Base hostname the fetcher was built with.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Fetches the quote for `subject`.
    ///
    /// The subject is appended to the URL verbatim, without escaping. Any failure
    /// is returned immediately and no partial quote is produced.
    pub fn fetch_quote(&self, subject: &str) -> Result<Quote> {
        let url = quote_url(&self.hostname, subject);
        debug!("Fetching quote from {}", url);

        let response = self
            .transport
            .get(&url)
            .map_err(FetchError::Transport)?
            .ok_or(FetchError::NilResponse)?;

        if !response.is_ok() {
            warn!("Quote request to {} rejected: {}", url, response.status_text());
            return Err(FetchError::Status(response.status_text().to_string()));
        }

        // The body stream is dropped at the end of this block, whether the read succeeded or not.
        let bytes = {
            let mut body = response.into_body();
            self.body_reader
                .read_body(&mut body)
                .map_err(FetchError::BodyRead)?
        };
        debug!("Read {} bytes from {}", bytes.len(), url);

        self.decoder.decode(&bytes).map_err(FetchError::Decode)
    }
}

impl fmt::Debug for QuoteFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteFetcher")
            .field("hostname", &self.hostname)
            .finish_non_exhaustive()
    }
}

/// Builder for `QuoteFetcher`. Collaborators left unset get their defaults.
pub struct QuoteFetcherBuilder {
    hostname: String,
    transport: Option<Box<dyn Transport>>,
    body_reader: Option<Box<dyn BodyReader>>,
    decoder: Option<Box<dyn Decoder>>,
}

impl QuoteFetcherBuilder {
    /// Applies a single option, replacing whatever was set for that collaborator.
    pub fn option(mut self, option: FetcherOption) -> Self {
        match option {
            FetcherOption::Transport(transport) => self.transport = Some(transport),
            FetcherOption::BodyReader(reader) => self.body_reader = Some(reader),
            FetcherOption::Decoder(decoder) => self.decoder = Some(decoder),
        }
        self
    }

    /// Replaces the transport.
    pub fn with_transport(self, transport: impl Transport + 'static) -> Self {
        self.option(FetcherOption::transport(transport))
    }

    /// Replaces the transport with a closure.
    pub fn with_transport_fn<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<Option<Response>, BoxError> + Send + Sync + 'static,
    {
        self.option(FetcherOption::transport_fn(f))
    }

    /// Replaces the body reader.
    pub fn with_body_reader(self, reader: impl BodyReader + 'static) -> Self {
        self.option(FetcherOption::body_reader(reader))
    }

    /// Replaces the body reader with a closure.
    pub fn with_body_reader_fn<F>(self, f: F) -> Self
    where
        F: Fn(&mut dyn Read) -> std::result::Result<Vec<u8>, BoxError> + Send + Sync + 'static,
    {
        self.option(FetcherOption::body_reader_fn(f))
    }

    /// Replaces the decoder.
    pub fn with_decoder(self, decoder: impl Decoder + 'static) -> Self {
        self.option(FetcherOption::decoder(decoder))
    }

    /// Replaces the decoder with a closure.
    pub fn with_decoder_fn<F>(self, f: F) -> Self
    where
        F: Fn(&[u8]) -> std::result::Result<Quote, BoxError> + Send + Sync + 'static,
    {
        self.option(FetcherOption::decoder_fn(f))
    }

    /// Builds the fetcher.
    pub fn build(self) -> QuoteFetcher {
        QuoteFetcher {
            hostname: self.hostname,
            transport: self
                .transport
                .unwrap_or_else(|| Box::new(HttpTransport::new())),
            body_reader: self.body_reader.unwrap_or_else(|| Box::new(ReadToEnd)),
            decoder: self.decoder.unwrap_or_else(|| Box::new(JsonDecoder)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::FetchErrorKind;
    use std::io;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const HOST: &str = "http://quotes.test";

    fn ok_json(quote: &Quote) -> Response {
        Response::from_bytes(200, "200 OK", quote.to_json_bytes().unwrap())
    }

    fn stub_transport(
        quote: Quote,
    ) -> impl Fn(&str) -> std::result::Result<Option<Response>, BoxError> + Send + Sync + 'static {
        move |_url: &str| Ok(Some(ok_json(&quote)))
    }

    #[test]
    fn builds_url_from_hostname_and_subject() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&seen);
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport_fn(move |url| {
                recorded.lock().unwrap().push(url.to_string());
                Ok(Some(ok_json(&Quote::new("art", "a", "t"))))
            })
            .build();

        fetcher.fetch_quote("art").unwrap();
        fetcher.fetch_quote("a b/c").unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "http://quotes.test/api/art".to_string(),
                "http://quotes.test/api/a b/c".to_string()
            ]
        );
    }

    #[test]
    fn returns_decoded_quote() {
        let expected = Quote::new("art", "author", "text");
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport(stub_transport(expected.clone()))
            .build();
        assert_eq!(fetcher.fetch_quote("art").unwrap(), expected);
    }

    #[test]
    fn transport_error() {
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport_fn(|_| {
                Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused").into())
            })
            .build();
        let err = fetcher.fetch_quote("art").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::TransportError);
    }

    #[test]
    fn missing_response() {
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport_fn(|_| Ok(None))
            .build();
        let err = fetcher.fetch_quote("art").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::NilResponseError);
    }

    #[test]
    fn non_200_status_carries_description() {
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport_fn(|_| Ok(Some(Response::from_bytes(404, "404 Not Found", "nope"))))
            .build();
        match fetcher.fetch_quote("art") {
            Err(FetchError::Status(text)) => assert_eq!(text, "404 Not Found"),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn rejected_response_body_is_not_read() {
        let read = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&read);
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport_fn(|_| Ok(Some(Response::from_bytes(500, "500 Internal Server Error", ""))))
            .with_body_reader_fn(move |_| {
                flag.store(true, Ordering::SeqCst);
                Ok(Vec::new())
            })
            .build();
        assert!(fetcher.fetch_quote("art").is_err());
        assert!(!read.load(Ordering::SeqCst));
    }

    #[test]
    fn body_read_error() {
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport(stub_transport(Quote::new("art", "a", "t")))
            .with_body_reader_fn(|_| Err("truncated body".into()))
            .build();
        let err = fetcher.fetch_quote("art").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::BodyReadError);
        assert_eq!(err.to_string(), "Body read error: truncated body");
    }

    #[test]
    fn decode_error() {
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport_fn(|_| Ok(Some(Response::from_bytes(200, "200 OK", "not json"))))
            .build();
        let err = fetcher.fetch_quote("art").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::DecodeError);
    }

    struct DropCounter(Arc<AtomicUsize>);

    impl Read for DropCounter {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn body_is_released_after_failed_read() {
        let drops = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&drops);
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport_fn(move |_| {
                Ok(Some(Response::new(200, "200 OK", DropCounter(Arc::clone(&counter)))))
            })
            .build();

        let err = fetcher.fetch_quote("art").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::BodyReadError);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn later_options_override_earlier_ones() {
        let fetcher = QuoteFetcher::with_options(
            HOST,
            vec![
                FetcherOption::transport_fn(|_| Ok(None)),
                FetcherOption::transport(stub_transport(Quote::new("art", "a", "t"))),
                FetcherOption::decoder_fn(|_| Err("first".into())),
                FetcherOption::decoder_fn(|_| Ok(Quote::new("x", "y", "z"))),
            ],
        );
        assert_eq!(fetcher.fetch_quote("art").unwrap(), Quote::new("x", "y", "z"));
    }

    #[test]
    fn repeated_fetches_are_identical() {
        let fetcher = QuoteFetcher::builder(HOST)
            .with_transport(stub_transport(Quote::new("art", "author", "text")))
            .build();
        let first = fetcher.fetch_quote("art").unwrap();
        for _ in 0..3 {
            assert_eq!(fetcher.fetch_quote("art").unwrap(), first);
        }
    }

    #[test]
    fn shared_between_threads() {
        let fetcher = Arc::new(
            QuoteFetcher::builder(HOST)
                .with_transport(stub_transport(Quote::new("art", "author", "text")))
                .build(),
        );
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let fetcher = Arc::clone(&fetcher);
                std::thread::spawn(move || fetcher.fetch_quote("art"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), Quote::new("art", "author", "text"));
        }
    }

    #[test]
    fn hostname_is_kept_verbatim() {
        let fetcher = QuoteFetcher::builder("http://quotes.test/").build();
        assert_eq!(fetcher.hostname(), "http://quotes.test/");
    }
}
