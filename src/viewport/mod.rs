//! The scrollable viewport the slider drives.
//!
//! A viewport reports its offset along the principal axis together with its
//! content and visible extents, and accepts instant or animated scroll
//! commands. RTL viewports report negative offsets for forward progress.
//! Animated commands are fire-and-forget: no completion is reported.
//!
//! Event delivery is explicit: [`Viewport::subscribe`] hands out a
//! [`Subscription`] to scroll events and [`ResizeNotifier::subscribe`] one to
//! resize notifications. Dropping a subscription unsubscribes.

mod simulated;

pub use simulated::SimulatedViewport;

use tokio::sync::broadcast;

/// Emitted by a viewport whenever its offset changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub offset: f64,
}

/// Emitted by the host when the visible area changes size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub width: f64,
    pub height: f64,
}

/// A scrollable region along one axis.
pub trait Viewport {
    /// Current raw offset (negative for forward progress in RTL).
    fn offset(&self) -> f64;

    /// Total length of the scrolled content.
    fn content_extent(&self) -> f64;

    /// Visible length of the viewport.
    fn viewport_extent(&self) -> f64;

    /// Jump to `offset` without animation.
    fn set_offset(&mut self, offset: f64);

    /// Animate to an absolute `offset`.
    fn scroll_to(&mut self, offset: f64);

    /// Animate by `delta` relative to the current offset.
    fn scroll_by(&mut self, delta: f64);

    /// Subscribe to scroll events.
    fn subscribe(&self) -> Subscription<ScrollEvent>;
}

/// Receiving end of a viewport or resize event stream.
///
/// Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: broadcast::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    pub fn new(rx: broadcast::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Wait for the next event. `None` once the source is gone.
    ///
    /// Events dropped because the subscriber fell behind are skipped; handlers
    /// recompute from current state so the latest event is enough.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Take a pending event without waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => return None,
            }
        }
    }
}

/// Host-side source of resize notifications.
#[derive(Debug, Clone)]
pub struct ResizeNotifier {
    tx: broadcast::Sender<ResizeEvent>,
}

impl ResizeNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    pub fn notify(&self, width: f64, height: f64) {
        // No subscribers is fine: nothing is mounted yet.
        let _ = self.tx.send(ResizeEvent { width, height });
    }

    pub fn subscribe(&self) -> Subscription<ResizeEvent> {
        Subscription::new(self.tx.subscribe())
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ResizeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
