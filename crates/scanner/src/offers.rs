//! HTTP client for the offer resolver endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use scanmarket_core::offer::FindProductResponse;
use scanmarket_core::query::OfferQuery;

/// Where scan events and manual searches are resolved into offers.
///
/// The scan loop fires exactly one `find_offers` call per newly seen
/// code; failures are logged by the caller and never interrupt scanning.
#[async_trait]
pub trait OfferSink: Send + Sync {
    async fn find_offers(&self, query: OfferQuery) -> Result<FindProductResponse, OfferClientError>;
}

/// Errors from the offer resolver client.
#[derive(Debug, thiserror::Error)]
pub enum OfferClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Offer request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The resolver returned a non-2xx status code.
    #[error("Offer resolver error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The resolver's `error` message, or the raw body when it did
        /// not parse.
        message: String,
    },
}

/// `{ "error": ... }` body the resolver sends with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client posting to `POST {base}/api/find-product`.
pub struct OfferClient {
    client: reqwest::Client,
    base_url: String,
}

impl OfferClient {
    /// Create a client for the resolver at `base_url`
    /// (e.g. `http://localhost:5174`).
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl OfferSink for OfferClient {
    async fn find_offers(&self, query: OfferQuery) -> Result<FindProductResponse, OfferClientError> {
        let response = self
            .client
            .post(format!("{}/api/find-product", self.base_url))
            .json(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "<unreadable body>".to_string(),
            };
            return Err(OfferClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<FindProductResponse>().await?)
    }
}
