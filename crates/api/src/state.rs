use std::sync::Arc;

use scanmarket_lookup::{OfferRanker, ProductApi, ProductNameLookup, RankApi, SearchApi, WebSearch};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds the three lookup seams behind `Arc<dyn ...>` so integration tests
/// can run the real router over deterministic lookups. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Best-effort barcode-to-name lookup.
    pub product: Arc<dyn ProductNameLookup>,
    /// Keyed web search.
    pub search: Arc<dyn WebSearch>,
    /// Generative ranking; `None` when no model credential is configured,
    /// which skips the step rather than failing it.
    pub ranker: Option<Arc<dyn OfferRanker>>,
}

impl AppState {
    /// Wire up the production lookup clients from configuration.
    pub fn from_config(config: ServerConfig) -> Self {
        let client = reqwest::Client::new();

        let product = Arc::new(ProductApi::with_client(
            client.clone(),
            scanmarket_lookup::product::OPEN_FOOD_FACTS_URL.to_string(),
        ));

        if config.google_cse_key.is_none() || config.google_cx.is_none() {
            tracing::warn!(
                "GOOGLE_CSE_KEY/GOOGLE_CX not set; search calls will fail upstream"
            );
        }
        let search = Arc::new(SearchApi::with_client(
            client.clone(),
            scanmarket_lookup::search::GOOGLE_SEARCH_URL.to_string(),
            config.google_cse_key.clone().unwrap_or_default(),
            config.google_cx.clone().unwrap_or_default(),
        ));

        let ranker: Option<Arc<dyn OfferRanker>> = match &config.gemini_api_key {
            Some(key) => {
                tracing::info!("Ranking enabled");
                Some(Arc::new(RankApi::with_client(
                    client,
                    scanmarket_lookup::rank::GEMINI_URL.to_string(),
                    key.clone(),
                    config.max_ranked_offers,
                )))
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set; ranking disabled");
                None
            }
        };

        Self {
            config: Arc::new(config),
            product,
            search,
            ranker,
        }
    }
}
