//! UI components for the demo.
//!
//! - `slider_view` - Directional controls, slide strip and scroll indicator
//! - `options_panel` - Current options, key hints and scroll state

mod options_panel;
mod slider_view;

pub use options_panel::render_options_panel;
pub use slider_view::{render_scroll_indicator, render_slider, slot_rows, strip_columns};
