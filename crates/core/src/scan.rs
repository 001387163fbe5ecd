//! Scan event model shared by the scanner component and the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Barcode symbology reported by a decoder.
///
/// Wire names match the identifiers used by native barcode decoders
/// (`ean_13`, `qr_code`, ...). Symbologies added by future decoders
/// deserialize as [`Unknown`](Self::Unknown) instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[serde(rename = "aztec")]
    Aztec,
    #[serde(rename = "code_128")]
    Code128,
    #[serde(rename = "code_39")]
    Code39,
    #[serde(rename = "code_93")]
    Code93,
    #[serde(rename = "codabar")]
    Codabar,
    #[serde(rename = "data_matrix")]
    DataMatrix,
    #[serde(rename = "ean_13")]
    Ean13,
    #[serde(rename = "ean_8")]
    Ean8,
    #[serde(rename = "itf")]
    Itf,
    #[serde(rename = "pdf417")]
    Pdf417,
    #[serde(rename = "qr_code")]
    QrCode,
    #[serde(rename = "upc_a")]
    UpcA,
    #[serde(rename = "upc_e")]
    UpcE,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl BarcodeFormat {
    /// Wire identifier for this symbology.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Aztec => "aztec",
            BarcodeFormat::Code128 => "code_128",
            BarcodeFormat::Code39 => "code_39",
            BarcodeFormat::Code93 => "code_93",
            BarcodeFormat::Codabar => "codabar",
            BarcodeFormat::DataMatrix => "data_matrix",
            BarcodeFormat::Ean13 => "ean_13",
            BarcodeFormat::Ean8 => "ean_8",
            BarcodeFormat::Itf => "itf",
            BarcodeFormat::Pdf417 => "pdf417",
            BarcodeFormat::QrCode => "qr_code",
            BarcodeFormat::UpcA => "upc_a",
            BarcodeFormat::UpcE => "upc_e",
            BarcodeFormat::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded barcode accepted by the session dedup.
///
/// Immutable once created; the raw value is unique within a scan session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanEvent {
    /// Decoded literal payload of the symbol.
    pub raw_value: String,
    /// Symbology the decoder reported.
    pub format: BarcodeFormat,
    /// When the code was first seen this session.
    pub timestamp: DateTime<Utc>,
}

impl ScanEvent {
    /// Create an event stamped with the current time.
    pub fn new(raw_value: impl Into<String>, format: BarcodeFormat) -> Self {
        Self {
            raw_value: raw_value.into(),
            format,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_round_trips_through_wire_names() {
        let json = serde_json::to_string(&BarcodeFormat::Ean13).unwrap();
        assert_eq!(json, "\"ean_13\"");

        let back: BarcodeFormat = serde_json::from_str("\"qr_code\"").unwrap();
        assert_eq!(back, BarcodeFormat::QrCode);
    }

    #[test]
    fn unrecognized_format_deserializes_as_unknown() {
        let format: BarcodeFormat = serde_json::from_str("\"micro_qr\"").unwrap();
        assert_eq!(format, BarcodeFormat::Unknown);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(BarcodeFormat::DataMatrix.to_string(), "data_matrix");
        assert_eq!(BarcodeFormat::UpcA.to_string(), "upc_a");
    }
}
