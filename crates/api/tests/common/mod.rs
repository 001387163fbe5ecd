//! Shared test fixtures: deterministic lookup stubs and request helpers.
//!
//! `build_test_app` runs the REAL router (same middleware stack as
//! production, via `build_app_router`) over stubbed lookup seams, so
//! integration tests exercise everything except the live network.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use scanmarket_api::config::ServerConfig;
use scanmarket_api::router::build_app_router;
use scanmarket_api::state::AppState;
use scanmarket_core::offer::{Offer, SearchResult};
use scanmarket_lookup::{OfferRanker, ProductNameLookup, SearchError, WebSearch};

/// Build a test `ServerConfig` with safe defaults.
///
/// Search credentials are set (the stubs never check them); the ranking
/// credential is irrelevant because tests inject the ranker directly.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        gemini_api_key: None,
        google_cse_key: Some("test-key".to_string()),
        google_cx: Some("test-cx".to_string()),
        max_ranked_offers: 6,
        search_result_count: 10,
    }
}

/// Build the full application router over the given lookup seams.
pub fn build_test_app(
    product: Arc<dyn ProductNameLookup>,
    search: Arc<dyn WebSearch>,
    ranker: Option<Arc<dyn OfferRanker>>,
) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        product,
        search,
        ranker,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Lookup stubs
// ---------------------------------------------------------------------------

/// Product lookup returning a fixed name (or none), counting calls.
pub struct StubProduct {
    name: Option<String>,
    calls: AtomicUsize,
}

impl StubProduct {
    pub fn named(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: Some(name.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn missing() -> Arc<Self> {
        Arc::new(Self {
            name: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductNameLookup for StubProduct {
    async fn product_name(&self, _barcode: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.name.clone()
    }
}

/// Search returning fixed results, counting calls.
pub struct StubSearch {
    results: Vec<SearchResult>,
    calls: AtomicUsize,
}

impl StubSearch {
    pub fn with_results(results: Vec<SearchResult>) -> Arc<Self> {
        Arc::new(Self {
            results,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WebSearch for StubSearch {
    async fn search(&self, _query: &str, _count: u8) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }
}

/// Search that always fails with a provider error.
pub struct FailingSearch {
    pub status: u16,
    pub body: String,
}

impl FailingSearch {
    pub fn with_status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
        })
    }
}

#[async_trait]
impl WebSearch for FailingSearch {
    async fn search(&self, _query: &str, _count: u8) -> Result<Vec<SearchResult>, SearchError> {
        Err(SearchError::Api {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Ranker returning a fixed outcome, counting calls.
pub struct StubRanker {
    offers: Option<Vec<Offer>>,
    calls: AtomicUsize,
}

impl StubRanker {
    pub fn with_offers(offers: Vec<Offer>) -> Arc<Self> {
        Arc::new(Self {
            offers: Some(offers),
            calls: AtomicUsize::new(0),
        })
    }

    /// A configured ranker whose output never parses.
    pub fn unparsable() -> Arc<Self> {
        Arc::new(Self {
            offers: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OfferRanker for StubRanker {
    async fn rank(&self, _query: &str, _results: &[SearchResult]) -> Option<Vec<Offer>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.offers.clone()
    }
}

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

/// Deterministic search results `tienda1.example` .. `tiendaN.example`.
pub fn sample_results(n: usize) -> Vec<SearchResult> {
    (1..=n)
        .map(|i| SearchResult {
            title: format!("Resultado {i}"),
            snippet: format!("Descripción del resultado {i}"),
            link: format!("https://tienda{i}.example/p/{i}"),
            display_link: format!("tienda{i}.example"),
        })
        .collect()
}

/// Deterministic ranked offers.
pub fn sample_offers(n: usize) -> Vec<Offer> {
    (1..=n)
        .map(|i| Offer {
            merchant: format!("tienda{i}.example"),
            title: format!("Oferta {i}"),
            url: format!("https://tienda{i}.example/p/{i}"),
            why: "tienda oficial".to_string(),
            maybe_price: Some(format!("${i}99 MXN")),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Assert status and return the parsed JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
