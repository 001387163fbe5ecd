//! The offer-resolution pipeline behind `POST /api/find-product`.
//!
//! Strictly sequential: normalize the request into one search string,
//! fail fast if there is none, search, then rank or fall back. The
//! product and ranking lookups report absence as `None`, so the fallback
//! control flow is a branch on presence, not exception interception;
//! only the search step propagates a hard error.

use scanmarket_core::error::CoreError;
use scanmarket_core::offer::{offers_from_results, FindProductResponse};
use scanmarket_core::query::{self, OfferQuery};

use crate::error::AppError;
use crate::state::AppState;

/// Resolve a barcode-or-query request into an ordered offer list.
pub async fn resolve(state: &AppState, request: OfferQuery) -> Result<FindProductResponse, AppError> {
    // Step 1: normalize. A non-blank free-text query wins verbatim;
    // otherwise the barcode path consults the product database.
    let search_string = match request.normalized_query() {
        Some(q) => q.to_string(),
        None => match request.normalized_barcode() {
            Some(barcode) => match state.product.product_name(barcode).await {
                Some(name) => query::product_query(&name),
                None => query::barcode_query(barcode),
            },
            None => String::new(),
        },
    };

    // Step 2: fail fast before any outbound search work.
    if search_string.is_empty() {
        return Err(CoreError::Validation("Falta query o barcode".into()).into());
    }

    // Step 3: search. A provider failure aborts the request.
    let results = state
        .search
        .search(&search_string, state.config.search_result_count)
        .await?;
    tracing::debug!(
        query = %search_string,
        results = results.len(),
        "Search completed"
    );

    // Step 4: rank, best-effort. Unconfigured or unparsable ranking
    // falls back to the 1:1 result mapping.
    let offers = match &state.ranker {
        Some(ranker) => match ranker.rank(&search_string, &results).await {
            Some(ranked) => ranked,
            None => offers_from_results(&results),
        },
        None => offers_from_results(&results),
    };

    Ok(FindProductResponse {
        query: search_string,
        offers,
    })
}
