//! Previous/next navigation with single-flight and wrap-around.
//!
//! One navigation is in flight at a time. A request is accepted only in
//! [`Phase::Idle`]; it issues exactly one scroll command and moves to
//! [`Phase::Navigating`] until the owner calls [`ScrollController::settle`]
//! once [`SETTLE_DELAY`] has elapsed. Requests arriving while navigating are
//! dropped, never queued.
//!
//! Looping never duplicates content: at the far boundary the controller
//! jumps the offset to the opposite boundary instead of stepping.

use std::time::Duration;

use crate::boundary::{Boundary, classify};
use crate::config::SliderConfig;
use crate::direction::Direction;
use crate::geometry::{max_scroll, step_distance};
use crate::log;
use crate::viewport::Viewport;

/// Time after a scroll command before another navigation is accepted.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Navigating,
}

/// Which way a navigation request moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Navigation {
    /// Relative scroll by `delta`
    Stepped { delta: f64 },
    /// Jump to the opposite boundary at `target`
    Wrapped { target: f64 },
    /// Rejected because a navigation is already in flight
    Dropped,
    /// Nothing to scroll (content fits or no viewport)
    Unmoved,
}

impl Navigation {
    /// Whether a scroll command was issued.
    pub fn issued(&self) -> bool {
        matches!(self, Navigation::Stepped { .. } | Navigation::Wrapped { .. })
    }
}

#[derive(Debug, Default)]
pub struct ScrollController {
    phase: Phase,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_navigating(&self) -> bool {
        self.phase == Phase::Navigating
    }

    /// Leave [`Phase::Navigating`]. Called by the owner of the settle timer.
    pub fn settle(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Back to idle without waiting, e.g. after the viewport was replaced.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn next<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        config: &SliderConfig,
        item_count: usize,
        direction: Direction,
    ) -> Navigation {
        self.navigate(Step::Next, viewport, config, item_count, direction)
    }

    pub fn previous<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        config: &SliderConfig,
        item_count: usize,
        direction: Direction,
    ) -> Navigation {
        self.navigate(Step::Previous, viewport, config, item_count, direction)
    }

    pub fn navigate<V: Viewport + ?Sized>(
        &mut self,
        step: Step,
        viewport: &mut V,
        config: &SliderConfig,
        item_count: usize,
        direction: Direction,
    ) -> Navigation {
        if self.phase == Phase::Navigating {
            log::log(&format!("navigation {:?} dropped: already navigating", step));
            return Navigation::Dropped;
        }

        let max = max_scroll(viewport.content_extent(), viewport.viewport_extent());
        if item_count <= 1 || max <= 0.0 {
            return Navigation::Unmoved;
        }

        let distance = step_distance(config);
        let boundary = classify(viewport.offset(), max);
        let outcome = plan(step, boundary, config.effective_loop(item_count), distance, max, direction);

        match outcome {
            Navigation::Stepped { delta } => viewport.scroll_by(delta),
            Navigation::Wrapped { target } => viewport.scroll_to(target),
            Navigation::Dropped | Navigation::Unmoved => return outcome,
        }

        log::log(&format!(
            "navigation {:?} ({}): {:?} from offset {}",
            step,
            direction,
            outcome,
            viewport.offset()
        ));
        self.phase = Phase::Navigating;
        outcome
    }
}

/// Decide between a relative step and a wrap jump.
fn plan(
    step: Step,
    boundary: Boundary,
    effective_loop: bool,
    distance: f64,
    max: f64,
    direction: Direction,
) -> Navigation {
    let forward = direction.forward_sign();
    match step {
        Step::Next if effective_loop && boundary.at_end => Navigation::Wrapped { target: 0.0 },
        Step::Next => Navigation::Stepped {
            delta: forward * distance,
        },
        Step::Previous if effective_loop && boundary.at_start => Navigation::Wrapped {
            target: forward * max,
        },
        Step::Previous => Navigation::Stepped {
            delta: -forward * distance,
        },
    }
}
