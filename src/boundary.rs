//! Start/end classification of a scroll offset.

/// Slack, in scroll units, absorbing sub-pixel rounding from animated scrolling.
pub const EDGE_TOLERANCE: f64 = 5.0;

/// Where an offset sits relative to the scroll boundaries.
///
/// Both flags can hold at once when the content fits the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boundary {
    pub at_start: bool,
    pub at_end: bool,
}

impl Boundary {
    pub fn in_between(&self) -> bool {
        !self.at_start && !self.at_end
    }
}

/// Classify a raw offset against `max_scroll`.
///
/// RTL viewports report negative offsets, so only the magnitude is compared.
pub fn classify(offset: f64, max_scroll: f64) -> Boundary {
    let offset_abs = offset.abs();
    Boundary {
        at_start: offset_abs <= EDGE_TOLERANCE,
        at_end: max_scroll - offset_abs <= EDGE_TOLERANCE,
    }
}
