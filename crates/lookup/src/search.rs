//! Web search via the Google Programmable Search JSON API.
//!
//! Unlike the product and ranking lookups, a failure here is a hard error:
//! the resolver has nothing to show without search results, so a non-2xx
//! provider response propagates with its status and body text. No retry.

use async_trait::async_trait;
use serde::Deserialize;

use scanmarket_core::offer::SearchResult;

use crate::WebSearch;

/// Google APIs host serving the Custom Search endpoint.
pub const GOOGLE_SEARCH_URL: &str = "https://www.googleapis.com";

/// HTTP client for the Custom Search JSON API.
///
/// Requires a search key and a Programmable Search Engine id. Both are
/// passed through verbatim; with missing credentials the provider rejects
/// the call and the error propagates, which keeps startup independent of
/// configuration.
pub struct SearchApi {
    client: reqwest::Client,
    base_url: String,
    key: String,
    cx: String,
}

/// Errors from the search API layer.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Google CSE error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Response envelope of `GET /customsearch/v1`.
#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
}

/// One provider result item. Fields the provider omits map to empty
/// strings rather than failing the whole response.
#[derive(Debug, Deserialize)]
struct CseItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
    #[serde(default, rename = "displayLink")]
    display_link: String,
}

impl From<CseItem> for SearchResult {
    fn from(item: CseItem) -> Self {
        SearchResult {
            title: item.title,
            snippet: item.snippet,
            link: item.link,
            display_link: item.display_link,
        }
    }
}

impl SearchApi {
    /// Create a client for the public Google endpoint.
    pub fn new(key: String, cx: String) -> Self {
        Self::with_client(reqwest::Client::new(), GOOGLE_SEARCH_URL.to_string(), key, cx)
    }

    /// Create a client reusing an existing [`reqwest::Client`] and
    /// targeting `base_url` (injectable for tests).
    pub fn with_client(client: reqwest::Client, base_url: String, key: String, cx: String) -> Self {
        Self {
            client,
            base_url,
            key,
            cx,
        }
    }
}

#[async_trait]
impl WebSearch for SearchApi {
    async fn search(&self, query: &str, count: u8) -> Result<Vec<SearchResult>, SearchError> {
        let num = count.to_string();
        let response = self
            .client
            .get(format!("{}/customsearch/v1", self.base_url))
            .query(&[
                ("key", self.key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<CseResponse>().await?;
        Ok(parsed.items.into_iter().map(SearchResult::from).collect())
    }
}
