use instant::Instant;
use std::time::Duration;

use crate::constants::{FPS_FAIR, FPS_GOOD, STATS_WINDOW_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub fps: u32,
    pub frame_time_ms: f32,
    pub particle_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpsBand {
    Good,
    Fair,
    Poor,
}

impl FrameReport {
    pub fn band(&self) -> FpsBand {
        if self.fps >= FPS_GOOD {
            FpsBand::Good
        } else if self.fps >= FPS_FAIR {
            FpsBand::Fair
        } else {
            FpsBand::Poor
        }
    }
}

/// Frame counter that reports once per window. Every recorded frame counts,
/// including the one that opens the first window.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window: Duration,
    window_start: Option<Instant>,
    frames: u32,
    last: FrameReport,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_millis(STATS_WINDOW_MS))
    }
}

impl FrameStats {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            window_start: None,
            frames: 0,
            last: FrameReport::default(),
        }
    }

    /// Open the first window at `now` (page mount) rather than at the first
    /// recorded frame.
    pub fn starting_at(window: Duration, now: Instant) -> Self {
        Self {
            window_start: Some(now),
            ..Self::new(window)
        }
    }

    /// Count one frame. Returns a fresh report when a window closes.
    pub fn record(&mut self, now: Instant, particle_count: usize) -> Option<FrameReport> {
        self.frames += 1;
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.window {
            return None;
        }
        let ms = elapsed.as_secs_f32() * 1000.0;
        self.last = FrameReport {
            fps: ((self.frames as f32 * 1000.0) / ms).round() as u32,
            frame_time_ms: ((ms / self.frames as f32) * 100.0).round() / 100.0,
            particle_count,
        };
        self.frames = 0;
        self.window_start = Some(now);
        Some(self.last)
    }

    #[inline]
    pub fn last(&self) -> FrameReport {
        self.last
    }
}
