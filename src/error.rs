//! Error types for halcursor
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for halcursor
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors (raised before any network traffic)
    // ============================================================================
    /// An externally supplied resource id does not carry the required prefix.
    #[error("Invalid {resource} id '{id}': a {resource} id should start with '{prefix}'")]
    Validation {
        /// Resource name the id was meant for
        resource: &'static str,
        /// The offending id
        id: String,
        /// Prefix the id was expected to start with
        prefix: &'static str,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Api {
        /// Status code of the response
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// The request never produced a usable response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON, or did not match the expected type.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Shape Errors
    // ============================================================================
    /// A list response lacks the embedded collection the resource declares.
    #[error("Response is missing embedded collection '{key}'")]
    DataShape {
        /// The `_embedded` key that was expected
        key: String,
    },

    /// A cursor link points back at a page that was already fetched.
    #[error("Cursor link loop detected at '{href}'")]
    CursorLoop {
        /// The repeated link target
        href: String,
    },
}

impl Error {
    /// Create a validation error for a badly prefixed id
    pub fn validation(resource: &'static str, id: impl Into<String>, prefix: &'static str) -> Self {
        Self::Validation {
            resource,
            id: id.into(),
            prefix,
        }
    }

    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a data shape error for a missing embedded key
    pub fn data_shape(key: impl Into<String>) -> Self {
        Self::DataShape { key: key.into() }
    }

    /// Create a cursor loop error
    pub fn cursor_loop(href: impl Into<String>) -> Self {
        Self::CursorLoop { href: href.into() }
    }

    /// The HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is retryable
    ///
    /// The crate never retries on its own; callers own the retry policy
    /// and can use this to decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(err) => !err.is_builder(),
            Error::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for halcursor
pub type Result<T> = std::result::Result<T, Error>;
