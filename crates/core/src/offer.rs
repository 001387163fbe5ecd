//! Wire types for `/api/find-product` and the search-result fallback.

use serde::{Deserialize, Serialize};
use url::Url;

/// Default cap on the number of offers the ranking step may return.
///
/// A product choice, not a technical limit; overridable through server
/// configuration. The fallback path (no ranking) is intentionally
/// unbounded and returns one offer per search hit.
pub const DEFAULT_MAX_RANKED_OFFERS: usize = 6;

/// One web-search hit, held only for the duration of a resolver call.
///
/// Field names mirror the search provider's item shape (`displayLink`)
/// because the full result list is also embedded verbatim in the ranking
/// prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
    #[serde(rename = "displayLink")]
    pub display_link: String,
}

/// A purchase suggestion shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Merchant name, inferred from the result's display host.
    pub merchant: String,
    pub title: String,
    pub url: String,
    /// Free-text rationale (availability, shipping, reputation, ...).
    pub why: String,
    /// Literal price text found in the snippet/title, never fabricated.
    #[serde(rename = "maybePrice")]
    pub maybe_price: Option<String>,
}

/// Response body of `POST /api/find-product`.
///
/// `offers` has at most the configured ranking cap when the ranking step
/// produced it, and exactly one entry per search hit otherwise; callers
/// must handle both sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindProductResponse {
    /// Effective search string the resolver ended up using.
    pub query: String,
    pub offers: Vec<Offer>,
}

/// Map raw search results 1:1 into offers, preserving provider order.
///
/// This is the defined fallback when ranking is unavailable or produced
/// no usable output: merchant is the display host (or the host parsed
/// from the link when the provider left it blank), the rationale is the
/// snippet, and no price is claimed.
pub fn offers_from_results(results: &[SearchResult]) -> Vec<Offer> {
    results
        .iter()
        .map(|r| Offer {
            merchant: if r.display_link.trim().is_empty() {
                link_host(&r.link).unwrap_or_default()
            } else {
                r.display_link.clone()
            },
            title: r.title.clone(),
            url: r.link.clone(),
            why: r.snippet.clone(),
            maybe_price: None,
        })
        .collect()
}

/// Host component of a result link, if the link parses as a URL.
fn link_host(link: &str) -> Option<String> {
    Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
}
