pub mod find_product;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST /api/find-product    resolve a barcode/query into offers
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(find_product::router())
}
