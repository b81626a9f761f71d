//! Writing direction of the slider's principal axis.
//!
//! Right-to-left viewports report negative offsets for forward progress, so
//! every navigation needs the direction at the moment it happens. The
//! direction is an explicit input (a `watch` channel owned by the host)
//! instead of a document-level global.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    /// Sign applied to forward (toward increasing content) motion.
    pub fn forward_sign(self) -> f64 {
        match self {
            Direction::Ltr => 1.0,
            Direction::Rtl => -1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    /// Parse a `dir` attribute value. Unset or unrecognised values are LTR.
    pub fn from_attr(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => write!(f, "ltr"),
            Direction::Rtl => write!(f, "rtl"),
        }
    }
}

/// Read side of the ambient direction setting.
///
/// Never cached: [`DirectionSource::resolve`] reads the latest value each time.
#[derive(Debug, Clone)]
pub struct DirectionSource {
    rx: Option<watch::Receiver<Direction>>,
}

impl DirectionSource {
    pub fn new(rx: watch::Receiver<Direction>) -> Self {
        Self { rx: Some(rx) }
    }

    /// A source that always resolves to LTR.
    pub fn unset() -> Self {
        Self { rx: None }
    }

    /// Create a sender/source pair seeded with `initial`.
    pub fn channel(initial: Direction) -> (watch::Sender<Direction>, Self) {
        let (tx, rx) = watch::channel(initial);
        (tx, Self::new(rx))
    }

    pub fn resolve(&self) -> Direction {
        match &self.rx {
            Some(rx) => *rx.borrow(),
            None => Direction::Ltr,
        }
    }
}

impl Default for DirectionSource {
    fn default() -> Self {
        Self::unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attr_defaults_to_ltr() {
        assert_eq!(Direction::from_attr(None), Direction::Ltr);
        assert_eq!(Direction::from_attr(Some("")), Direction::Ltr);
        assert_eq!(Direction::from_attr(Some("auto")), Direction::Ltr);
        assert_eq!(Direction::from_attr(Some("RTL")), Direction::Rtl);
    }

    #[test]
    fn test_resolve_is_not_cached() {
        let (tx, source) = DirectionSource::channel(Direction::Ltr);
        assert_eq!(source.resolve(), Direction::Ltr);

        tx.send_replace(Direction::Rtl);
        assert_eq!(source.resolve(), Direction::Rtl);
    }

    #[test]
    fn test_resolve_survives_dropped_sender() {
        let (tx, source) = DirectionSource::channel(Direction::Rtl);
        drop(tx);
        assert_eq!(source.resolve(), Direction::Rtl);
        assert_eq!(DirectionSource::unset().resolve(), Direction::Ltr);
    }

    #[test]
    fn test_forward_sign() {
        assert_eq!(Direction::Ltr.forward_sign(), 1.0);
        assert_eq!(Direction::Rtl.forward_sign(), -1.0);
        assert_eq!(Direction::Rtl.toggled(), Direction::Ltr);
    }
}
