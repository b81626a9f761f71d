//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,

    // === Navigation ===
    /// Scroll toward the start
    Previous,
    /// Scroll toward the end
    Next,
    /// Mouse wheel notches over the strip (positive = toward the end)
    Wheel(i32),

    // === Options ===
    /// Switch between LTR and RTL
    ToggleDirection,
    /// Enable/disable wrap-around
    ToggleLoop,
    /// Enable/disable autoplay
    ToggleAutoplay,
    /// Show/hide the scroll indicator
    ToggleScrollIndicator,
    /// One more item per step
    IncreaseStep,
    /// One less item per step
    DecreaseStep,
    /// Widen the gap between slides
    IncreaseGap,
    /// Narrow the gap between slides
    DecreaseGap,
    /// Slower autoplay
    IncreaseInterval,
    /// Faster autoplay
    DecreaseInterval,

    /// No action
    None,
}
