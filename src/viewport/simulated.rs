//! In-memory viewport with optional smooth-scroll animation.
//!
//! Behaves like a browser scroll container: offsets are clamped to the
//! scrollable range (`[0, max]` in LTR, `[-max, 0]` in RTL), a scroll event
//! is emitted whenever the offset changes, and a new command supersedes an
//! animation still in flight. Clones share the same state, so a renderer can
//! read the offset while the slider runtime owns another clone.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::Instant;

use crate::direction::Direction;
use crate::geometry::max_scroll;

use super::{ScrollEvent, Subscription, Viewport};

/// Time between animation frames.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug)]
struct Model {
    offset: f64,
    content_extent: f64,
    viewport_extent: f64,
    direction: Direction,
    /// Bumped by every scroll command; stale animations stop when it changes.
    generation: u64,
    animating: bool,
}

impl Model {
    fn clamp(&self, offset: f64) -> f64 {
        let max = max_scroll(self.content_extent, self.viewport_extent);
        match self.direction {
            Direction::Ltr => offset.clamp(0.0, max),
            Direction::Rtl => offset.clamp(-max, 0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedViewport {
    model: Arc<Mutex<Model>>,
    events: broadcast::Sender<ScrollEvent>,
    animation: Duration,
}

impl SimulatedViewport {
    /// A viewport whose animated commands complete immediately.
    pub fn new(content_extent: f64, viewport_extent: f64) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            model: Arc::new(Mutex::new(Model {
                offset: 0.0,
                content_extent,
                viewport_extent,
                direction: Direction::Ltr,
                generation: 0,
                animating: false,
            })),
            events,
            animation: Duration::ZERO,
        }
    }

    /// Animate smooth scrolls over `duration` (requires a tokio runtime;
    /// without one commands complete immediately).
    pub fn with_animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Model> {
        self.model.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Switch layout direction, keeping the scrolled magnitude.
    pub fn set_direction(&self, direction: Direction) {
        let mut model = self.lock();
        if model.direction == direction {
            return;
        }
        model.direction = direction;
        model.generation += 1;
        model.animating = false;
        let flipped = model.clamp(-model.offset);
        Self::apply(&mut model, &self.events, flipped);
    }

    pub fn direction(&self) -> Direction {
        self.lock().direction
    }

    pub fn set_content_extent(&self, extent: f64) {
        let mut model = self.lock();
        model.content_extent = extent.max(0.0);
        let clamped = model.clamp(model.offset);
        Self::apply(&mut model, &self.events, clamped);
    }

    pub fn set_viewport_extent(&self, extent: f64) {
        let mut model = self.lock();
        model.viewport_extent = extent.max(0.0);
        let clamped = model.clamp(model.offset);
        Self::apply(&mut model, &self.events, clamped);
    }

    pub fn is_animating(&self) -> bool {
        self.lock().animating
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn apply(model: &mut Model, events: &broadcast::Sender<ScrollEvent>, offset: f64) {
        if model.offset == offset {
            return;
        }
        model.offset = offset;
        let _ = events.send(ScrollEvent { offset });
    }

    fn animate(&mut self, target: f64) {
        let (generation, from, target) = {
            let mut model = self.lock();
            model.generation += 1;
            (model.generation, model.offset, model.clamp(target))
        };

        let runtime = tokio::runtime::Handle::try_current().ok();
        let runtime = match runtime {
            Some(runtime) if !self.animation.is_zero() && from != target => runtime,
            _ => {
                let mut model = self.lock();
                model.animating = false;
                Self::apply(&mut model, &self.events, target);
                return;
            }
        };

        self.lock().animating = true;
        let model = Arc::clone(&self.model);
        let events = self.events.clone();
        let duration = self.animation;

        runtime.spawn(async move {
            let started = Instant::now();
            let mut frames = tokio::time::interval(FRAME);
            loop {
                frames.tick().await;
                let progress = (started.elapsed().as_secs_f64() / duration.as_secs_f64()).min(1.0);
                let value = from + (target - from) * ease_in_out(progress);

                let mut guard = model.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                if guard.generation != generation {
                    return;
                }
                let value = if progress >= 1.0 { target } else { value };
                let clamped = guard.clamp(value);
                Self::apply(&mut guard, &events, clamped);
                if progress >= 1.0 {
                    guard.animating = false;
                    return;
                }
            }
        });
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

impl Viewport for SimulatedViewport {
    fn offset(&self) -> f64 {
        self.lock().offset
    }

    fn content_extent(&self) -> f64 {
        self.lock().content_extent
    }

    fn viewport_extent(&self) -> f64 {
        self.lock().viewport_extent
    }

    fn set_offset(&mut self, offset: f64) {
        let mut model = self.lock();
        model.generation += 1;
        model.animating = false;
        let clamped = model.clamp(offset);
        Self::apply(&mut model, &self.events, clamped);
    }

    fn scroll_to(&mut self, offset: f64) {
        self.animate(offset);
    }

    fn scroll_by(&mut self, delta: f64) {
        let current = self.offset();
        self.animate(current + delta);
    }

    fn subscribe(&self) -> Subscription<ScrollEvent> {
        Subscription::new(self.events.subscribe())
    }
}
