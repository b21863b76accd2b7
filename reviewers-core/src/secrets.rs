//! API token handling
//!
//! The token is only ever read from the command line or the `INPUT_TOKEN`
//! environment variable, never from the config file. It is wrapped so that
//! logging or debug-printing a value holding it cannot leak it.

use std::fmt;

const REDACTED: &str = "***";

/// Access token for the review API
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token, trimming whitespace
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let token = raw.as_ref().trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    /// Build a token from an optional raw value
    pub fn from_input(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::new)
    }

    /// The raw secret value, for handing to the API client and the log masker
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&REDACTED).finish()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
