//! Effective-search-query construction for the offer resolver.
//!
//! The resolver turns a request into exactly one search string before any
//! outbound search happens: a non-blank free-text query wins verbatim
//! (trimmed); otherwise the barcode path builds a purchase-intent query
//! from the product name when one is known, or from the bare code.

use serde::{Deserialize, Serialize};

/// Request body of `POST /api/find-product`.
///
/// Exactly one of the two fields must be usable after normalization.
/// When both are supplied, the free-text query takes precedence and the
/// barcode is ignored entirely (no product lookup is issued).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferQuery {
    pub barcode: Option<String>,
    pub query: Option<String>,
}

impl OfferQuery {
    /// Trimmed free-text query, if non-blank.
    pub fn normalized_query(&self) -> Option<&str> {
        non_blank(self.query.as_deref())
    }

    /// Trimmed barcode, if non-blank.
    pub fn normalized_barcode(&self) -> Option<&str> {
        non_blank(self.barcode.as_deref())
    }
}

/// Trim `value` and drop it when blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Search string for a barcode whose product name is known.
///
/// ```
/// use scanmarket_core::query::product_query;
/// assert_eq!(product_query("Leche Lala Entera 1L"), "Leche Lala Entera 1L comprar precio");
/// ```
pub fn product_query(name: &str) -> String {
    format!("{} comprar precio", name.trim())
}

/// Search string for a barcode with no product-database match.
///
/// ```
/// use scanmarket_core::query::barcode_query;
/// assert_eq!(barcode_query("0123456789012"), "0123456789012 comprar");
/// ```
pub fn barcode_query(barcode: &str) -> String {
    format!("{} comprar", barcode.trim())
}
