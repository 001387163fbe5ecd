//! Route definitions for the offer resolver.

use axum::routing::post;
use axum::Router;

use crate::handlers::find_product;
use crate::state::AppState;

/// Offer resolver routes mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/find-product", post(find_product::find_product))
}
