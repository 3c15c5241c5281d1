//! Response classification for the character list endpoint.
//!
//! The API signals "no character matches this name" (and "page out of range")
//! with a 404, which must stay distinguishable from every other failure so the
//! page can echo the query back to the user.

use crate::domain::{BrowserError, CharacterPage};

/// Why a fetch did not produce a page of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The API answered 404.
    NotFound,
    /// Any other non-success status, including host-level network failures.
    Http { status: u16 },
    /// The request could not be built or the body could not be decoded.
    Unexpected(String),
}

impl FetchError {
    /// Turns the failure into the message shown in place of the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use character_browser::api::FetchError;
    ///
    /// assert_eq!(
    ///     FetchError::NotFound.user_message("zzzznotfound"),
    ///     "No characters found for \"zzzznotfound\""
    /// );
    /// assert_eq!(FetchError::NotFound.user_message(""), "Failed to load characters.");
    /// ```
    #[must_use]
    pub fn user_message(&self, search: &str) -> String {
        match self {
            Self::NotFound if !search.is_empty() => {
                format!("No characters found for \"{search}\"")
            }
            Self::NotFound | Self::Http { .. } => "Failed to load characters.".to_string(),
            Self::Unexpected(_) => "An unexpected error occurred".to_string(),
        }
    }
}

impl From<BrowserError> for FetchError {
    fn from(err: BrowserError) -> Self {
        match err {
            BrowserError::Http { status: 404 } => Self::NotFound,
            BrowserError::Http { status } => Self::Http { status },
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Http { status } => write!(f, "http status {status}"),
            Self::Unexpected(message) => write!(f, "unexpected: {message}"),
        }
    }
}

/// Decodes the body of a successful response.
///
/// # Errors
///
/// Returns [`BrowserError::Http`] for non-2xx statuses and
/// [`BrowserError::Decode`] when the body is not a character page.
fn decode(status: u16, body: &[u8]) -> crate::Result<CharacterPage> {
    if !(200..300).contains(&status) {
        return Err(BrowserError::Http { status });
    }
    Ok(serde_json::from_slice(body)?)
}

/// Classifies a host response into a page of characters or a [`FetchError`].
///
/// # Errors
///
/// - [`FetchError::NotFound`] on 404
/// - [`FetchError::Http`] on any other non-2xx status
/// - [`FetchError::Unexpected`] when a 2xx body does not decode
pub fn parse_response(status: u16, body: &[u8]) -> Result<CharacterPage, FetchError> {
    let result = decode(status, body).map_err(FetchError::from);

    match &result {
        Ok(page) => tracing::debug!(
            status = status,
            results = page.results.len(),
            pages = page.info.pages,
            "character page decoded"
        ),
        Err(e) => tracing::debug!(status = status, error = %e, "character fetch failed"),
    }

    result
}
