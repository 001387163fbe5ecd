use scanmarket_core::offer::DEFAULT_MAX_RANKED_OFFERS;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Missing
/// credentials degrade functionality (ranking skipped / search calls
/// rejected upstream) instead of preventing startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5174`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Gemini API key; `None` disables the ranking step entirely.
    pub gemini_api_key: Option<String>,
    /// Google Custom Search key.
    pub google_cse_key: Option<String>,
    /// Programmable Search Engine id.
    pub google_cx: Option<String>,
    /// Cap on offers returned by the ranking step (default: 6).
    pub max_ranked_offers: usize,
    /// Result count requested from the search provider (default: 10).
    pub search_result_count: u8,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5174`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `GEMINI_API_KEY`       | unset (ranking disabled)   |
    /// | `GOOGLE_CSE_KEY`       | unset                      |
    /// | `GOOGLE_CX`            | unset                      |
    /// | `MAX_RANKED_OFFERS`    | `6`                        |
    /// | `SEARCH_RESULT_COUNT`  | `10`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5174".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_ranked_offers: usize = std::env::var("MAX_RANKED_OFFERS")
            .unwrap_or_else(|_| DEFAULT_MAX_RANKED_OFFERS.to_string())
            .parse()
            .expect("MAX_RANKED_OFFERS must be a valid usize");

        let search_result_count: u8 = std::env::var("SEARCH_RESULT_COUNT")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SEARCH_RESULT_COUNT must be a valid u8");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            gemini_api_key: env_credential("GEMINI_API_KEY"),
            google_cse_key: env_credential("GOOGLE_CSE_KEY"),
            google_cx: env_credential("GOOGLE_CX"),
            max_ranked_offers,
            search_result_count,
        }
    }
}

/// Read a credential env var, treating blank values as unset.
fn env_credential(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
