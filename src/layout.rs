//! Slot layout handed to the rendering side.
//!
//! Items sit in fixed `item_width × item_height` slots separated by `gap`.
//! Nothing is duplicated for looping: the strip holds exactly `count` slots.

use crate::config::SliderConfig;

/// Placement of one slot along the principal axis, measured from the
/// content start edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub start: f64,
    pub width: f64,
    pub height: f64,
}

impl Slot {
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    /// Whether any part of the slot lies within `[view_start, view_start + view_extent)`.
    pub fn intersects(&self, view_start: f64, view_extent: f64) -> bool {
        self.end() > view_start && self.start < view_start + view_extent
    }
}

/// Total length of the strip for `count` items.
pub fn content_extent(config: &SliderConfig, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * config.item_width + (count - 1) as f64 * config.gap
}

/// Slot geometry for `count` items in display order.
pub fn slots(config: &SliderConfig, count: usize) -> Vec<Slot> {
    (0..count)
        .map(|index| Slot {
            index,
            start: index as f64 * (config.item_width + config.gap),
            width: config.item_width,
            height: config.item_height,
        })
        .collect()
}
