//! Per-session deduplication of decoded barcodes.

use std::collections::HashSet;

use uuid::Uuid;

use scanmarket_core::scan::ScanEvent;

use crate::decoder::DetectedCode;

/// Seen-set owned by one scanning session.
///
/// A raw value is accepted once per session; clearing the results display
/// clears this set too, and removing a single result re-arms its value so
/// it can be scanned again.
#[derive(Debug)]
pub struct ScanSession {
    id: Uuid,
    seen: HashSet<String>,
}

impl ScanSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "Scan session started");
        Self {
            id,
            seen: HashSet::new(),
        }
    }

    /// Session identifier, used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Accept a detection if its trimmed raw value is non-blank and not
    /// seen this session; returns the resulting event.
    pub fn observe(&mut self, code: &DetectedCode) -> Option<ScanEvent> {
        let raw = code.raw_value.trim();
        if raw.is_empty() || self.seen.contains(raw) {
            return None;
        }
        self.seen.insert(raw.to_owned());
        Some(ScanEvent::new(raw, code.format))
    }

    /// Drop a single value from the seen-set so it can be scanned again.
    pub fn forget(&mut self, raw_value: &str) -> bool {
        self.seen.remove(raw_value.trim())
    }

    /// Reset the session (the UI's "clear results" action).
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Number of distinct values seen this session.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}
