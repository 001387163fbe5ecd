//! Integration tests for the health endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

use common::{
    body_json, build_test_app, get, sample_offers, sample_results, StubProduct, StubRanker,
    StubSearch,
};

// ---------------------------------------------------------------------------
// Test: GET /health reports status and capabilities
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_capabilities() {
    let app = build_test_app(
        StubProduct::missing(),
        StubSearch::with_results(sample_results(1)),
        None,
    );
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["ranking_enabled"], false);
    assert_eq!(json["search_configured"], true);
}

#[tokio::test]
async fn health_check_reports_ranking_enabled() {
    let app = build_test_app(
        StubProduct::missing(),
        StubSearch::with_results(sample_results(1)),
        Some(StubRanker::with_offers(sample_offers(1))),
    );
    let response = get(app, "/health").await;

    let json = body_json(response).await;
    assert_eq!(json["ranking_enabled"], true);
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(
        StubProduct::missing(),
        StubSearch::with_results(Vec::new()),
        None,
    );
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(
        StubProduct::missing(),
        StubSearch::with_results(Vec::new()),
        None,
    );
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns the allowed origin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_allowed_origin() {
    let app = build_test_app(
        StubProduct::missing(),
        StubSearch::with_results(Vec::new()),
        None,
    );

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/find-product")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("preflight must allow the configured origin");
    assert_eq!(allow_origin, "http://localhost:5173");
}

// ---------------------------------------------------------------------------
// Test: request bodies above 1 MiB are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = build_test_app(
        StubProduct::missing(),
        StubSearch::with_results(Vec::new()),
        None,
    );

    let huge = format!("{{\"query\": \"{}\"}}", "x".repeat(2 * 1024 * 1024));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/find-product")
        .header("content-type", "application/json")
        .body(Body::from(huge))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
