//! Best-effort barcode-to-name lookup against Open Food Facts.
//!
//! Open Food Facts is keyless and mostly covers food products, so a miss
//! is the common case. Every failure mode here (network, non-2xx,
//! malformed body, product without a name) is an expected "no result",
//! logged and swallowed; the resolver then falls back to searching the
//! bare barcode.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::ProductNameLookup;

/// Public Open Food Facts instance.
pub const OPEN_FOOD_FACTS_URL: &str = "https://world.openfoodfacts.org";

/// HTTP client for the Open Food Facts product API.
pub struct ProductApi {
    client: reqwest::Client,
    base_url: String,
}

/// Envelope of `GET /api/v2/product/{barcode}.json`.
#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    product: Option<ProductFields>,
}

/// Name-bearing fields of a product record.
#[derive(Debug, Default, Deserialize)]
struct ProductFields {
    product_name: Option<String>,
    generic_name: Option<String>,
    brands_tags: Option<Vec<String>>,
}

impl ProductFields {
    /// First non-blank candidate: product name, then generic name, then
    /// the first brand tag. Trimmed.
    fn first_name(&self) -> Option<String> {
        [
            self.product_name.as_deref(),
            self.generic_name.as_deref(),
            self.brands_tags.as_deref().and_then(|tags| {
                tags.first().map(String::as_str)
            }),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_owned)
    }
}

impl ProductApi {
    /// Create a client for the public Open Food Facts instance.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), OPEN_FOOD_FACTS_URL.to_string())
    }

    /// Create a client reusing an existing [`reqwest::Client`] and
    /// targeting `base_url` (injectable for tests and mirrors).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Build the product URL, percent-encoding the barcode as a path
    /// segment (scanned raw values are not guaranteed to be digits).
    fn product_url(&self, barcode: &str) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["api", "v2", "product", &format!("{barcode}.json")]);
        Some(url)
    }
}

impl Default for ProductApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductNameLookup for ProductApi {
    async fn product_name(&self, barcode: &str) -> Option<String> {
        let url = self.product_url(barcode)?;

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(barcode, error = %e, "Product lookup request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(barcode, status = %response.status(), "Product lookup returned non-success");
            return None;
        }

        let envelope = match response.json::<ProductEnvelope>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::debug!(barcode, error = %e, "Product lookup body did not parse");
                return None;
            }
        };

        let name = envelope.product.and_then(|p| p.first_name());
        if name.is_none() {
            tracing::debug!(barcode, "Product record has no usable name");
        }
        name
    }
}
