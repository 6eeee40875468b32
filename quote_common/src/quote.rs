//! Quote record returned by the quote API.
//!
//! A `Quote` is decoded from a JSON object with the fields `subject`, `author`
//! and `text`. Missing fields decode as empty strings and unknown fields are
//! ignored.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A quote on a given subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Subject the quote was requested for (e.g., `art`).
    pub subject: String,
    /// Who said or wrote it.
    pub author: String,
    /// The quote itself.
    pub text: String,
}

impl Quote {
    /// Creates a new `Quote` from its three fields.
    pub fn new(subject: &str, author: &str, text: &str) -> Self {
        Quote {
            subject: String::from(subject),
            author: String::from(author),
            text: String::from(text),
        }
    }

    /// Encodes the quote as a JSON object.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, FetchError> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {} ({})", self.text, self.author, self.subject)
    }
}
