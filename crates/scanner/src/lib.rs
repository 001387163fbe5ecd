//! Scan/detect loop for the scanmarket platform.
//!
//! Continuously samples video frames (or a single still image) through a
//! platform-provided barcode decoder, deduplicates decoded values within a
//! session, maps bounding boxes into display space for the overlay, and
//! forwards each newly seen code to the offer resolver over HTTP.
//!
//! The decoder and the resolver endpoint are both seams
//! ([`decoder::BarcodeDecoder`], [`offers::OfferSink`]); a platform with no
//! decoder capability runs the loop with detection disabled.

pub mod decoder;
pub mod detect;
pub mod fps;
pub mod offers;
pub mod overlay;
pub mod session;
