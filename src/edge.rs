//! Visibility of the start/end directional controls.

use serde::Serialize;

use crate::boundary::classify;
use crate::config::SliderConfig;
use crate::geometry::max_scroll;
use crate::viewport::Viewport;

/// Which directional controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeVisibility {
    pub start: bool,
    pub end: bool,
}

impl EdgeVisibility {
    pub const HIDDEN: Self = Self {
        start: false,
        end: false,
    };

    pub const BOTH: Self = Self {
        start: true,
        end: true,
    };

    /// Compute from raw viewport measurements.
    ///
    /// In a usable loop there is always more to scroll to, so both controls
    /// show. A single item (or none) has no boundary to scroll past.
    pub fn compute(
        config: &SliderConfig,
        item_count: usize,
        offset: f64,
        content_extent: f64,
        viewport_extent: f64,
    ) -> Self {
        if item_count <= 1 {
            return Self::HIDDEN;
        }
        if config.effective_loop(item_count) && item_count > config.items_per_step {
            return Self::BOTH;
        }
        let boundary = classify(offset, max_scroll(content_extent, viewport_extent));
        Self {
            start: !boundary.at_start,
            end: !boundary.at_end,
        }
    }

    pub fn from_viewport<V: Viewport + ?Sized>(
        config: &SliderConfig,
        item_count: usize,
        viewport: &V,
    ) -> Self {
        Self::compute(
            config,
            item_count,
            viewport.offset(),
            viewport.content_extent(),
            viewport.viewport_extent(),
        )
    }
}

impl Default for EdgeVisibility {
    // Before the first measurement: nothing behind, more ahead.
    fn default() -> Self {
        Self {
            start: false,
            end: true,
        }
    }
}
