// SPDX-License-Identifier: MPL-2.0
//! Staggered fade-in of grid tiles.
//!
//! After every grid rebuild, tile `i` starts fading in `i * stagger` after
//! the rebuild and reaches full opacity [`REVEAL_DURATION_MS`] later. The
//! state is purely presentational; the gallery controller never reads it.

use crate::config::REVEAL_DURATION_MS;
use std::time::{Duration, Instant};

/// Tracks the running reveal animation, if any.
#[derive(Debug, Clone)]
pub struct RevealState {
    started_at: Option<Instant>,
    stagger: Duration,
    count: usize,
}

impl RevealState {
    #[must_use]
    pub fn new(stagger: Duration) -> Self {
        Self {
            started_at: None,
            stagger,
            count: 0,
        }
    }

    /// Restarts the animation for a freshly built grid of `count` tiles.
    pub fn restart(&mut self, count: usize, now: Instant) {
        self.started_at = Some(now);
        self.count = count;
    }

    #[must_use]
    pub fn stagger(&self) -> Duration {
        self.stagger
    }

    /// Time from restart until the last tile is fully visible.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        let last = u32::try_from(self.count.saturating_sub(1)).unwrap_or(u32::MAX);
        self.stagger.saturating_mul(last) + Duration::from_millis(REVEAL_DURATION_MS)
    }

    /// Whether some tile is still below full opacity at `now`.
    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        match self.started_at {
            Some(start) if self.count > 0 => {
                now.saturating_duration_since(start) < self.total_duration()
            }
            _ => false,
        }
    }

    /// Opacity of tile `index` at `now`, in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self, index: usize, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return 1.0;
        };

        let delay = self
            .stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
        let elapsed = now.saturating_duration_since(start);
        let Some(local) = elapsed.checked_sub(delay) else {
            return 0.0;
        };

        let t = local.as_secs_f32() / Duration::from_millis(REVEAL_DURATION_MS).as_secs_f32();
        ease_out_cubic(t.clamp(0.0, 1.0))
    }

    /// Drops the animation once every tile is visible.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_running(now) {
            self.started_at = None;
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
