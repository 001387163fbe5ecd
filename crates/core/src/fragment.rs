//! Locate and parse a JSON array embedded in free-form model output.
//!
//! The ranking model is instructed to reply with a bare JSON array, but
//! replies routinely arrive wrapped in prose or code fences. Extraction is
//! a best-effort parsing step with an explicit found/not-found outcome:
//! nothing here returns an error.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;

/// First `[ { ... } ]` fragment in the text (greedy, like the original
/// extraction the prompt was tuned against).
fn array_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[\s*\{[\s\S]*\}\s*\]").expect("array fragment pattern must compile")
    })
}

/// Locate the first top-level array-of-objects fragment in `text`.
///
/// Returns the raw fragment without attempting to parse it.
pub fn array_fragment(text: &str) -> Option<&str> {
    array_pattern().find(text).map(|m| m.as_str())
}

/// Locate and deserialize the first array-of-objects fragment in `text`.
///
/// `None` when no fragment is present or the fragment does not
/// deserialize as `Vec<T>`; malformed model output is an expected-empty
/// outcome, never an error.
pub fn extract_array<T: DeserializeOwned>(text: &str) -> Option<Vec<T>> {
    let fragment = array_fragment(text)?;
    serde_json::from_str(fragment).ok()
}
