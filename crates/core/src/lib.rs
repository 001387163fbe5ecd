//! Domain layer for the scanmarket platform.
//!
//! This crate is dependency-light (no async runtime, no HTTP) so it can be
//! shared by the API server, the external-lookup clients, and the scanner
//! component. It holds the wire types for `/api/find-product`, the scan
//! event model, and the pure logic of the offer-resolution pipeline:
//! effective-query construction, the search-result fallback mapping, and
//! the JSON-fragment locator used on model output.

pub mod error;
pub mod fragment;
pub mod offer;
pub mod query;
pub mod scan;
