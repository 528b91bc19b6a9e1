//! Error types for fetchartifact
//!
//! Failures are split by where they happen:
//! - transport errors from the HTTP session (DNS, connect, reset, timeout, body read)
//! - non-success HTTP statuses returned by the build service
//! - invalid configuration or arguments, rejected before any request is sent
//! - I/O errors from a caller-supplied writer

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Result type alias for fetchartifact operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fetchartifact
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed by the HTTP session
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The build service answered with a non-success status
    ///
    /// The response body is never read for these, so only the status line and
    /// headers are available for diagnostics.
    #[error("HTTP status {status} fetching {url}")]
    HttpStatus {
        /// Status returned by the server
        status: StatusCode,
        /// Download URL that was requested
        url: String,
        /// Response headers
        headers: HeaderMap,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "chunk_size")
        key: Option<String>,
    },

    /// Writing artifact data to a sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>, key: &str) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// HTTP status associated with this error, if any
    ///
    /// Covers both [`Error::HttpStatus`] and transport errors that carry a status.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the failure is transient and the caller may try again
    ///
    /// Nothing in this crate retries; this only lets an orchestration layer
    /// decide whether its own retry policy should apply.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_timeout() || e.is_connect(),
            Error::HttpStatus { status, .. } => {
                *status == StatusCode::REQUEST_TIMEOUT
                    || *status == StatusCode::TOO_MANY_REQUESTS
                    || status.is_server_error()
            }
            Error::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::TimedOut
            ),
            Error::Config { .. } => false,
        }
    }
}
