//! Error handling for slackbot
//!
//! A single error type is shared by every operation. The `code` tells callers
//! which kind of failure occurred; the optional fields carry whatever the
//! service reported alongside it.

use std::fmt;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Generic/unknown error
    Unknown,
    /// Invalid argument or configuration (e.g. missing token)
    InvalidArgument,
    /// HTTP or WebSocket transport failure
    NetworkError,
    /// The service answered with `"ok": false`
    Api,
    /// Response body could not be decoded or lacked a required field
    Parse,
    /// A name did not resolve to any record
    NotFound,
    /// Invalid state for operation
    InvalidState,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::Api => "API error",
            ErrorCode::Parse => "Parse error",
            ErrorCode::NotFound => "Not found",
            ErrorCode::InvalidState => "Invalid state",
        }
    }
}

/// Library error type
#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// Error string reported by the service (e.g. "invalid_auth", "channel_not_found")
    pub(crate) api_error: Option<String>,
    /// HTTP status code if this error came from an HTTP response
    pub(crate) http_status: Option<u16>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
            api_error: None,
            http_status: None,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidArgument, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::NetworkError, msg)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::Parse, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::NotFound, msg)
    }

    /// Add the service's error string (builder pattern)
    pub fn with_api_error(mut self, id: impl Into<String>) -> Self {
        self.api_error = Some(id.into());
        self
    }

    /// Add HTTP status code (builder pattern)
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Get the service's error string if available
    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    /// Get the HTTP status code if available
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Slack Bot Error] {}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let error = Error::network(format!("HTTP request failed: {e}"));
        match e.status() {
            Some(status) => error.with_http_status(status.as_u16()),
            None => error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::parse(format!("Failed to parse response: {e}"))
    }
}
