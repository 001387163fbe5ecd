//! Handler for `POST /api/find-product`.

use axum::extract::State;
use axum::Json;

use scanmarket_core::offer::FindProductResponse;
use scanmarket_core::query::OfferQuery;

use crate::error::AppResult;
use crate::resolver;
use crate::state::AppState;

/// Resolve a scanned barcode or free-text query into purchase offers.
///
/// Responds 400 when neither field yields a usable search string and 500
/// when a downstream call hard-fails; see [`crate::resolver::resolve`].
pub async fn find_product(
    State(state): State<AppState>,
    Json(body): Json<OfferQuery>,
) -> AppResult<Json<FindProductResponse>> {
    let response = resolver::resolve(&state, body).await?;
    Ok(Json(response))
}
