// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failure taxonomy for feed and playlist loading.
///
/// Errors are delivered to the player as `DataFailed` events, never thrown
/// across the event boundary. The state machine itself neither produces nor
/// consumes these; it only reacts to the resulting events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested URL could not be parsed.
    InvalidUrl(String),

    /// The request never produced an HTTP response (DNS, connect, TLS,
    /// timeout).
    Transport(String),

    /// The server answered with a non-success status code.
    HttpStatus(u16),

    /// The response body could not be decoded (malformed JSON feed,
    /// unparseable playlist, undecodable image bytes).
    Decode(String),

    /// The response decoded cleanly but the expected payload was absent.
    DataNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            Error::Transport(msg) => write!(f, "Transport failure: {}", msg),
            Error::HttpStatus(code) => write!(f, "HTTP status failure: {}", code),
            Error::Decode(msg) => write!(f, "Decode failure: {}", msg),
            Error::DataNotFound => write!(f, "Requested data not found"),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::HttpStatus(status.as_u16());
        }
        if err.is_decode() {
            return Error::Decode(err.to_string());
        }
        if err.is_builder() {
            return Error::InvalidUrl(err.to_string());
        }
        Error::Transport(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
