use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

use crate::constants::{SWIPE_COOLDOWN_MS, SWIPE_MIN_DISTANCE, SWIPE_MIN_SAMPLES, SWIPE_WINDOW_MS};

#[derive(Clone, Copy, Debug)]
struct SwipeSample {
    x: f32,
    at: Instant,
}

#[derive(Clone, Copy, Debug)]
pub struct SwipeParams {
    pub window: Duration,
    pub min_samples: usize,
    pub min_distance: f32,
    pub cooldown: Duration,
}

impl Default for SwipeParams {
    fn default() -> Self {
        Self {
            window: Duration::from_millis(SWIPE_WINDOW_MS),
            min_samples: SWIPE_MIN_SAMPLES,
            min_distance: SWIPE_MIN_DISTANCE,
            cooldown: Duration::from_millis(SWIPE_COOLDOWN_MS),
        }
    }
}

/// Edge-triggered horizontal swipe detector over a trailing time window.
#[derive(Clone, Debug, Default)]
pub struct SwipeDetector {
    params: SwipeParams,
    history: SmallVec<[SwipeSample; 32]>,
    cooldown_until: Option<Instant>,
}

impl SwipeDetector {
    pub fn new(params: SwipeParams) -> Self {
        Self {
            params,
            history: SmallVec::new(),
            cooldown_until: None,
        }
    }

    /// Feed the tracked landmark's horizontal position. Returns `true` on the
    /// single sample that completes a swipe.
    pub fn update(&mut self, x: f32, now: Instant) -> bool {
        if let Some(until) = self.cooldown_until {
            if now < until {
                return false;
            }
            self.cooldown_until = None;
        }

        self.history.push(SwipeSample { x, at: now });
        let window = self.params.window;
        self.history
            .retain(|s| now.saturating_duration_since(s.at) < window);

        if self.history.len() < self.params.min_samples {
            return false;
        }
        let (Some(first), Some(last)) = (self.history.first(), self.history.last()) else {
            return false;
        };
        let distance = (last.x - first.x).abs();
        if distance > self.params.min_distance {
            log::debug!(
                "[gesture] swipe {:.3} over {} samples",
                distance,
                self.history.len()
            );
            self.cooldown_until = Some(now + self.params.cooldown);
            self.history.clear();
            return true;
        }
        false
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.history.len()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.cooldown_until = None;
    }
}
