//! Request construction for the character list endpoint.

use crate::domain::Result;
use std::collections::BTreeMap;
use url::Url;

/// Key under which the request id travels in the host request context.
pub const REQUEST_ID_KEY: &str = "request_id";

/// What to ask the API for: a 1-based page and an optional name filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterQuery {
    pub page: u32,
    pub name: Option<String>,
}

impl CharacterQuery {
    /// Builds a query from the page number and the (debounced) search text.
    ///
    /// Empty search text means "list everything".
    ///
    /// # Examples
    ///
    /// ```
    /// use character_browser::api::CharacterQuery;
    ///
    /// assert_eq!(CharacterQuery::new(2, "").name, None);
    /// assert_eq!(CharacterQuery::new(1, "Rick").name.as_deref(), Some("Rick"));
    /// ```
    #[must_use]
    pub fn new(page: u32, search: &str) -> Self {
        Self {
            page,
            name: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

/// A fully built GET request, ready for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Monotonic id; responses are matched back to requests through it.
    pub id: u64,
    pub url: String,
    pub query: CharacterQuery,
}

impl ApiRequest {
    /// Context map attached to the host request and echoed in its result.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(REQUEST_ID_KEY.to_string(), self.id.to_string());
        context
    }

    /// Recovers the request id from a result context.
    #[must_use]
    pub fn id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        context.get(REQUEST_ID_KEY).and_then(|id| id.parse().ok())
    }
}

/// Builds list/search requests against a configured API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClient {
    base_url: String,
}

impl CharacterClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request for `query`, tagging it with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Request`](crate::BrowserError::Request) if the
    /// base URL does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use character_browser::api::{CharacterClient, CharacterQuery};
    ///
    /// let client = CharacterClient::new("https://rickandmortyapi.com/api");
    /// let request = client.request(1, &CharacterQuery::new(3, "")).unwrap();
    /// assert_eq!(request.url, "https://rickandmortyapi.com/api/character?page=3");
    /// ```
    pub fn request(&self, id: u64, query: &CharacterQuery) -> Result<ApiRequest> {
        let endpoint = format!("{}/character", self.base_url.trim_end_matches('/'));

        let mut params = vec![("page", query.page.to_string())];
        if let Some(name) = &query.name {
            params.push(("name", name.clone()));
        }

        let url = Url::parse_with_params(&endpoint, &params)?;

        tracing::debug!(request_id = id, url = %url, "built character request");

        Ok(ApiRequest {
            id,
            url: url.into(),
            query: query.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_is_encoded() {
        let client = CharacterClient::new("https://rickandmortyapi.com/api/");
        let request = client
            .request(4, &CharacterQuery::new(1, "Mr. Poopy & co"))
            .unwrap();

        assert_eq!(
            request.url,
            "https://rickandmortyapi.com/api/character?page=1&name=Mr.+Poopy+%26+co"
        );
        assert_eq!(request.id, 4);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let client = CharacterClient::new("not a url");
        let err = client.request(1, &CharacterQuery::new(1, "")).unwrap_err();
        assert!(matches!(err, crate::BrowserError::Request(_)));
    }

    #[test]
    fn request_id_round_trips_through_context() {
        let request = ApiRequest {
            id: 42,
            url: String::new(),
            query: CharacterQuery::new(1, ""),
        };
        assert_eq!(ApiRequest::id_from_context(&request.context()), Some(42));
        assert_eq!(ApiRequest::id_from_context(&BTreeMap::new()), None);
    }
}
