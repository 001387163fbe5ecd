//! Generative ranking of search results via the Gemini REST API.
//!
//! The model receives the query and the raw result list inside a
//! fixed-schema instruction prompt and is asked for a strict JSON array of
//! offers, never inventing prices. Model output is prose-wrapped often
//! enough that extraction goes through the fragment locator; anything that
//! does not yield a valid offer array is treated as "no result" so the
//! resolver can fall back to the plain result mapping.

use async_trait::async_trait;
use serde::Deserialize;

use scanmarket_core::fragment;
use scanmarket_core::offer::{Offer, SearchResult};

use crate::OfferRanker;

/// Google Generative Language API host.
pub const GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for ranking.
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Construct via [`RankApi::from_key`]; without a configured key the
/// ranking step does not exist at all (the resolver holds no ranker and
/// skips straight to the fallback).
pub struct RankApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_offers: usize,
}

/// Response envelope of `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    fn reply_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl RankApi {
    /// Create a client for the public Gemini endpoint, capping output at
    /// `max_offers` entries.
    pub fn from_key(api_key: String, max_offers: usize) -> Self {
        Self::with_client(
            reqwest::Client::new(),
            GEMINI_URL.to_string(),
            api_key,
            max_offers,
        )
    }

    /// Create a client reusing an existing [`reqwest::Client`] and
    /// targeting `base_url` (injectable for tests).
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        api_key: String,
        max_offers: usize,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model: GEMINI_MODEL.to_string(),
            max_offers,
        }
    }

    /// Fixed-schema instruction prompt for one ranking call.
    fn build_prompt(&self, query: &str, results: &[SearchResult]) -> String {
        let items = serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string());
        format!(
            r#"Eres un asistente que toma resultados de búsqueda web y genera hasta {max} ofertas para comprar un producto.
Devuelve JSON estricto con este esquema:
[
  {{ "merchant": string, "title": string, "url": string, "why": string, "maybePrice": string | null }}
]

- 'merchant': usa displayLink o dedúcelo del link/título.
- 'maybePrice': si ves precio en snippet/título (por ejemplo "$", "MXN", "USD", "€"), extráelo tal cual; si no, null.
- 'why': breve razón (disponibilidad, envío, reputación, oficial, etc.)
- No inventes precios.

Query: "{query}"
Resultados:
{items}"#,
            max = self.max_offers,
        )
    }

    /// Parse a model reply into at most `max_offers` offers.
    fn offers_from_reply(&self, text: &str) -> Option<Vec<Offer>> {
        let mut offers: Vec<Offer> = fragment::extract_array(text)?;
        offers.truncate(self.max_offers);
        Some(offers)
    }
}

#[async_trait]
impl OfferRanker for RankApi {
    async fn rank(&self, query: &str, results: &[SearchResult]) -> Option<Vec<Offer>> {
        let prompt = self.build_prompt(query, results);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = match self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Ranking request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Ranking returned non-success");
            return None;
        }

        let parsed = match response.json::<GenerateContentResponse>().await {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Ranking body did not parse");
                return None;
            }
        };

        let offers = parsed
            .reply_text()
            .and_then(|text| self.offers_from_reply(&text));
        if offers.is_none() {
            tracing::debug!("Ranking reply contained no offer array");
        }
        offers
    }
}
