//! Scroll distances derived from the slider configuration.

use crate::config::SliderConfig;

/// Distance of one navigation step: `(item_width + gap) * items_per_step`.
pub fn step_distance(config: &SliderConfig) -> f64 {
    (config.item_width + config.gap) * config.items_per_step as f64
}

/// Largest scroll magnitude the viewport can reach. Never negative.
pub fn max_scroll(content_extent: f64, viewport_extent: f64) -> f64 {
    (content_extent - viewport_extent).max(0.0)
}
