//! The scan/detect loop.
//!
//! Frames arrive on a channel at the display's cadence; the loop runs at
//! most one detection at a time (a slow detection simply delays the next
//! tick), deduplicates raw values through the session seen-set, and fires
//! one offer-resolver request per newly seen code on a spawned task so a
//! slow or failing resolver never stalls scanning.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use scanmarket_core::offer::FindProductResponse;
use scanmarket_core::query::OfferQuery;
use scanmarket_core::scan::ScanEvent;

use crate::decoder::{BarcodeDecoder, DecodeError, Frame, RectF};
use crate::fps::FpsCounter;
use crate::offers::OfferSink;
use crate::overlay::Viewport;
use crate::session::ScanSession;

/// Per-frame output for the overlay renderer.
#[derive(Debug)]
pub struct FrameUpdate {
    /// Bounding boxes of every code in this frame, in display space.
    pub boxes: Vec<RectF>,
    /// Most recent frames-per-second reading.
    pub fps: u32,
    /// Codes newly seen this frame (already deduplicated).
    pub events: Vec<ScanEvent>,
}

/// Errors from the single-image scan path.
#[derive(Debug, thiserror::Error)]
pub enum StillScanError {
    /// The platform has no barcode decoder; the UI must signal
    /// unavailability instead of offering image submission.
    #[error("No barcode decoder available on this platform")]
    DecoderUnavailable,

    /// The decoder rejected the image.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Drives detection over a stream of frames.
pub struct ScanLoop {
    decoder: Option<Arc<dyn BarcodeDecoder>>,
    session: ScanSession,
    viewport: Viewport,
    sink: Arc<dyn OfferSink>,
    offers: mpsc::Sender<FindProductResponse>,
    fps: FpsCounter,
}

impl ScanLoop {
    /// Create a loop. `decoder` is `None` on platforms without the
    /// capability; the loop then reports frames without detecting.
    /// Resolved offers are forwarded on `offers`; the renderer fully
    /// replaces its display per message, so overlapping in-flight
    /// requests resolve to last-response-wins.
    pub fn new(
        decoder: Option<Arc<dyn BarcodeDecoder>>,
        viewport: Viewport,
        sink: Arc<dyn OfferSink>,
        offers: mpsc::Sender<FindProductResponse>,
    ) -> Self {
        Self {
            decoder,
            session: ScanSession::new(),
            viewport,
            sink,
            offers,
            fps: FpsCounter::new(Instant::now()),
        }
    }

    /// Whether detection is possible on this platform.
    pub fn detection_available(&self) -> bool {
        self.decoder.is_some()
    }

    /// The session seen-set (for the UI's clear/remove actions).
    pub fn session_mut(&mut self) -> &mut ScanSession {
        &mut self.session
    }

    /// Consume frames until the channel closes or `cancel` fires.
    pub async fn run(
        mut self,
        mut frames: mpsc::Receiver<Frame>,
        updates: mpsc::Sender<FrameUpdate>,
        cancel: CancellationToken,
    ) {
        if self.decoder.is_none() {
            tracing::warn!(
                session = %self.session.id(),
                "No barcode decoder available; detection disabled"
            );
        }

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::info!(session = %self.session.id(), "Scan loop cancelled");
                    break;
                }
                frame = frames.recv() => {
                    let Some(frame) = frame else { break };
                    let update = self.process_frame(&frame).await;
                    if updates.send(update).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    /// Run one detection pass over a still image, deduplicating and
    /// dispatching like the live loop. Returns the newly seen codes.
    pub async fn scan_still(&mut self, frame: &Frame) -> Result<Vec<ScanEvent>, StillScanError> {
        let decoder = self
            .decoder
            .as_ref()
            .ok_or(StillScanError::DecoderUnavailable)?;

        let codes = decoder.detect(frame).await?;
        let mut events = Vec::new();
        for code in &codes {
            if let Some(event) = self.session.observe(code) {
                self.dispatch(&event);
                events.push(event);
            }
        }
        Ok(events)
    }

    async fn process_frame(&mut self, frame: &Frame) -> FrameUpdate {
        self.fps.tick(Instant::now());

        let mut boxes = Vec::new();
        let mut events = Vec::new();

        if let Some(decoder) = &self.decoder {
            match decoder.detect(frame).await {
                Ok(codes) => {
                    for code in &codes {
                        if let Some(rect) = code.bounding_box {
                            boxes.push(self.viewport.map_rect(rect));
                        }
                        if let Some(event) = self.session.observe(code) {
                            tracing::info!(
                                session = %self.session.id(),
                                raw_value = %event.raw_value,
                                format = %event.format,
                                "New code scanned"
                            );
                            self.dispatch(&event);
                            events.push(event);
                        }
                    }
                }
                // A failing detection attempt is logged and skipped; the
                // loop continues on the next frame.
                Err(e) => {
                    tracing::warn!(session = %self.session.id(), error = %e, "Detector error");
                }
            }
        }

        FrameUpdate {
            boxes,
            fps: self.fps.current(),
            events,
        }
    }

    /// Fire exactly one resolver request for a newly seen code.
    fn dispatch(&self, event: &ScanEvent) {
        let sink = Arc::clone(&self.sink);
        let offers = self.offers.clone();
        let session = self.session.id();
        let query = OfferQuery {
            barcode: Some(event.raw_value.clone()),
            query: None,
        };

        tokio::spawn(async move {
            match sink.find_offers(query).await {
                Ok(response) => {
                    tracing::info!(
                        session = %session,
                        query = %response.query,
                        offers = response.offers.len(),
                        "Offers resolved"
                    );
                    let _ = offers.send(response).await;
                }
                Err(e) => {
                    tracing::warn!(session = %session, error = %e, "Offer lookup failed");
                }
            }
        });
    }
}
