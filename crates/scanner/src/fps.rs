//! Rolling one-second frame counter, display-only.

use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts frames per rolling one-second window.
///
/// Purely informational; the value is shown next to the viewfinder and
/// never affects detection.
#[derive(Debug)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    current: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            current: 0,
        }
    }

    /// Count one frame at `now`. When a window closes, returns the new
    /// frames-per-second reading.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if now.duration_since(self.window_start) >= WINDOW {
            self.current = self.frames;
            self.frames = 0;
            self.window_start = now;
            Some(self.current)
        } else {
            None
        }
    }

    /// Most recent completed-window reading (0 until a window closes).
    pub fn current(&self) -> u32 {
        self.current
    }
}
