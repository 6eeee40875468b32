//! API path constants and URL helpers used by the fetcher.

/// Path segment inserted between the hostname and the subject.
pub const API_PATH: &str = "/api/";

/// HTTP status code accepted as a successful quote response.
pub const STATUS_OK: u16 = 200;

/// Builds the quote URL as `hostname + "/api/" + subject`.
///
/// Neither part is normalized or escaped: a trailing slash on `hostname` or a
/// `/` inside `subject` ends up in the URL as given.
pub fn quote_url(hostname: &str, subject: &str) -> String {
    format!("{}{}{}", hostname, API_PATH, subject)
}
