//! Error types for the character browser.
//!
//! [`BrowserError`] covers everything that can go wrong between issuing a
//! request and drawing the page. Fetch failures are later folded into a single
//! user-facing message by [`crate::api::FetchError`]; this type is what the
//! rest of the crate propagates with `?`.

use thiserror::Error;

/// The main error type for character browser operations.
///
/// # Examples
///
/// ```
/// use character_browser::BrowserError;
///
/// let err = BrowserError::Http { status: 500 };
/// assert_eq!(err.to_string(), "HTTP request failed with status 500");
/// ```
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The API answered with a non-success status code.
    #[error("HTTP request failed with status {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid request: {0}")]
    Request(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for BrowserError {
    fn from(err: url::ParseError) -> Self {
        Self::Request(err.to_string())
    }
}

/// A specialized `Result` type for character browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
