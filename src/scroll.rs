//! Mouse-wheel input to discrete navigation requests.
//!
//! High-resolution wheels and trackpads deliver bursts of small deltas.
//! Deltas are summed over a short window and converted into a single
//! previous/next request once the sum crosses a threshold, so one flick
//! does not fire a string of requests that would be dropped anyway.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut wheel = WheelAccumulator::default();
//!
//! // In event loop:
//! if let Some(step) = wheel.accumulate(delta) {
//!     slider.navigate(step).await?;
//! }
//! ```

use std::time::{Duration, Instant};

use crate::controller::Step;

/// Sums wheel deltas into navigation steps.
///
/// Positive deltas move toward the end of the content.
#[derive(Debug, Clone)]
pub struct WheelAccumulator {
    pending: i32,
    last_event: Option<Instant>,
    window: Duration,
    threshold: i32,
}

impl Default for WheelAccumulator {
    fn default() -> Self {
        Self::new(Duration::from_millis(120), 2)
    }
}

impl WheelAccumulator {
    /// # Arguments
    /// * `window` - Idle time after which a partial sum is discarded
    /// * `threshold` - Accumulated notches needed for one step
    pub fn new(window: Duration, threshold: i32) -> Self {
        Self {
            pending: 0,
            last_event: None,
            window,
            threshold: threshold.max(1),
        }
    }

    pub fn accumulate(&mut self, delta: i32) -> Option<Step> {
        self.accumulate_at(delta, Instant::now())
    }

    /// Like [`accumulate`](Self::accumulate) with an explicit timestamp.
    pub fn accumulate_at(&mut self, delta: i32, now: Instant) -> Option<Step> {
        let stale = self
            .last_event
            .map(|last| now.duration_since(last) > self.window)
            .unwrap_or(true);
        let reversed = self.pending.signum() * delta.signum() < 0;

        if stale || reversed {
            self.pending = delta;
        } else {
            self.pending += delta;
        }
        self.last_event = Some(now);

        if self.pending.abs() >= self.threshold {
            let step = if self.pending > 0 { Step::Next } else { Step::Previous };
            self.pending = 0;
            Some(step)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.pending = 0;
        self.last_event = None;
    }
}
