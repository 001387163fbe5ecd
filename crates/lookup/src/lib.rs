//! Clients for the three external services the offer resolver chains:
//! product-name lookup (Open Food Facts), keyed web search (Google
//! Programmable Search), and generative ranking (Gemini).
//!
//! The resolver consumes the trait seams defined here, not the concrete
//! clients, so tests can substitute deterministic lookups. Error handling
//! follows the pipeline's taxonomy: the product and ranking lookups are
//! best-effort and report absence as `None`, only the search step surfaces
//! a hard error.

use async_trait::async_trait;

use scanmarket_core::offer::{Offer, SearchResult};

pub mod product;
pub mod rank;
pub mod search;

pub use product::ProductApi;
pub use rank::RankApi;
pub use search::{SearchApi, SearchError};

/// Best-effort barcode-to-product-name translation.
#[async_trait]
pub trait ProductNameLookup: Send + Sync {
    /// Human-readable name for `barcode`, or `None` when the database has
    /// no usable match. Never errors; callers proceed with the
    /// barcode-based fallback query.
    async fn product_name(&self, barcode: &str) -> Option<String>;
}

/// Keyed web search returning provider-ordered results.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Fetch up to `count` results for `query`.
    ///
    /// A non-success provider response is a hard failure and aborts the
    /// resolver request. No retry.
    async fn search(&self, query: &str, count: u8) -> Result<Vec<SearchResult>, SearchError>;
}

/// Optional generative condensation of search results into offers.
#[async_trait]
pub trait OfferRanker: Send + Sync {
    /// Structured offers for `query`, or `None` when the model produced
    /// no parsable output. Never errors; callers fall back to the 1:1
    /// result mapping.
    async fn rank(&self, query: &str, results: &[SearchResult]) -> Option<Vec<Offer>>;
}
