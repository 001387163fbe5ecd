//! Decoder seam: frames in, detected codes out.

use async_trait::async_trait;

use scanmarket_core::scan::BarcodeFormat;

/// Symbologies a native decoder is assumed to handle when it does not
/// report its own list.
pub const DEFAULT_FORMATS: &[BarcodeFormat] = &[
    BarcodeFormat::Aztec,
    BarcodeFormat::Code128,
    BarcodeFormat::Code39,
    BarcodeFormat::Code93,
    BarcodeFormat::Codabar,
    BarcodeFormat::DataMatrix,
    BarcodeFormat::Ean13,
    BarcodeFormat::Ean8,
    BarcodeFormat::Itf,
    BarcodeFormat::Pdf417,
    BarcodeFormat::QrCode,
    BarcodeFormat::UpcA,
    BarcodeFormat::UpcE,
];

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One sampled video frame (or decoded still image), RGBA8.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// One code found in a frame, in video pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedCode {
    /// Decoded literal payload.
    pub raw_value: String,
    /// Symbology the decoder reported.
    pub format: BarcodeFormat,
    /// Location in the frame; decoders may omit it.
    pub bounding_box: Option<RectF>,
}

/// A single detection attempt failed. The loop logs and skips the frame.
#[derive(Debug, thiserror::Error)]
#[error("Detection failed: {0}")]
pub struct DecodeError(pub String);

/// Platform barcode decoder capability.
///
/// Detection must not overlap with itself; the loop awaits each call
/// before scheduling the next frame, so implementations need no internal
/// queuing.
#[async_trait]
pub trait BarcodeDecoder: Send + Sync {
    /// Detect all codes visible in `frame`.
    async fn detect(&self, frame: &Frame) -> Result<Vec<DetectedCode>, DecodeError>;

    /// Symbologies this decoder handles.
    fn supported_formats(&self) -> Vec<BarcodeFormat> {
        DEFAULT_FORMATS.to_vec()
    }
}
