//! The slider widget state across its mounted lifetime.
//!
//! [`Carousel`] ties the snapshot inputs (config, item count, direction) to
//! the viewport, the scroll controller and the edge indicator. Before
//! [`Carousel::mount`] and after [`Carousel::unmount`] there is no viewport
//! and every operation is a no-op. Timers and event delivery are the
//! caller's job; see [`crate::runtime`] for the async driver.

use serde::Serialize;

use crate::config::{RecomputeKey, SliderConfig};
use crate::controller::{Navigation, ScrollController, Step};
use crate::direction::{Direction, DirectionSource};
use crate::edge::EdgeVisibility;
use crate::log;
use crate::viewport::Viewport;

/// Point-in-time view of the scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollState {
    pub offset: f64,
    pub content_extent: f64,
    pub viewport_extent: f64,
    pub is_navigating: bool,
    pub start_edge_visible: bool,
    pub end_edge_visible: bool,
    pub mounted: bool,
}

#[derive(Debug)]
pub struct Carousel<V> {
    config: SliderConfig,
    item_count: usize,
    direction: DirectionSource,
    viewport: Option<V>,
    controller: ScrollController,
    edges: EdgeVisibility,
}

impl<V: Viewport> Carousel<V> {
    pub fn new(config: SliderConfig, item_count: usize, direction: DirectionSource) -> Self {
        Self {
            config,
            item_count,
            direction,
            viewport: None,
            controller: ScrollController::new(),
            edges: EdgeVisibility::default(),
        }
    }

    /// Attach the viewport: scroll back to the start and compute initial edges.
    pub fn mount(&mut self, mut viewport: V) {
        viewport.set_offset(0.0);
        self.viewport = Some(viewport);
        self.controller.reset();
        self.refresh_edges();
        log::log(&format!(
            "mounted: {} items, loop={}, autoplay={}",
            self.item_count,
            self.effective_loop(),
            self.config.autoplay_enabled
        ));
    }

    /// Detach and hand back the viewport.
    pub fn unmount(&mut self) -> Option<V> {
        let viewport = self.viewport.take();
        if viewport.is_some() {
            self.controller.reset();
            log::log("unmounted");
        }
        viewport
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn effective_loop(&self) -> bool {
        self.config.effective_loop(self.item_count)
    }

    pub fn edges(&self) -> EdgeVisibility {
        self.edges
    }

    pub fn is_navigating(&self) -> bool {
        self.controller.is_navigating()
    }

    /// Direction resolved right now.
    pub fn direction(&self) -> Direction {
        self.direction.resolve()
    }

    pub fn next(&mut self) -> Navigation {
        self.navigate(Step::Next)
    }

    pub fn previous(&mut self) -> Navigation {
        self.navigate(Step::Previous)
    }

    pub fn navigate(&mut self, step: Step) -> Navigation {
        let direction = self.direction.resolve();
        match self.viewport.as_mut() {
            Some(viewport) => {
                self.controller
                    .navigate(step, viewport, &self.config, self.item_count, direction)
            }
            None => Navigation::Unmoved,
        }
    }

    /// The settle delay has elapsed.
    pub fn settle(&mut self) {
        self.controller.settle();
    }

    /// Scroll event from the viewport.
    pub fn on_scroll(&mut self) -> EdgeVisibility {
        self.refresh_edges()
    }

    /// Ambient resize notification.
    pub fn on_resize(&mut self) -> EdgeVisibility {
        self.refresh_edges()
    }

    /// Recompute edge visibility from the viewport. Unchanged when unmounted.
    pub fn refresh_edges(&mut self) -> EdgeVisibility {
        if let Some(viewport) = self.viewport.as_ref() {
            self.edges = EdgeVisibility::from_viewport(&self.config, self.item_count, viewport);
        }
        self.edges
    }

    pub fn recompute_key(&self) -> RecomputeKey {
        self.config.recompute_key(self.item_count)
    }

    /// Apply a new config/item snapshot.
    ///
    /// Returns `true` when a recomputation dependency changed; the offset is
    /// then reset to the start, as on mount.
    pub fn reconfigure(&mut self, config: SliderConfig, item_count: usize) -> bool {
        let before = self.recompute_key();
        self.config = config;
        self.item_count = item_count;
        let changed = before != self.recompute_key();

        if changed {
            if let Some(viewport) = self.viewport.as_mut() {
                viewport.set_offset(0.0);
            }
            log::log(&format!(
                "reconfigured: {} items, loop={}, autoplay={}",
                self.item_count,
                self.effective_loop(),
                self.config.autoplay_enabled
            ));
        }
        self.refresh_edges();
        changed
    }

    pub fn snapshot(&self) -> ScrollState {
        let (offset, content_extent, viewport_extent) = match self.viewport.as_ref() {
            Some(viewport) => (
                viewport.offset(),
                viewport.content_extent(),
                viewport.viewport_extent(),
            ),
            None => (0.0, 0.0, 0.0),
        };
        ScrollState {
            offset,
            content_extent,
            viewport_extent,
            is_navigating: self.controller.is_navigating(),
            start_edge_visible: self.edges.start,
            end_edge_visible: self.edges.end,
            mounted: self.viewport.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::viewport::SimulatedViewport;

    fn scenario_config(loop_enabled: bool) -> SliderConfig {
        SliderConfig {
            item_width: 200.0,
            gap: 16.0,
            items_per_step: 1,
            loop_enabled,
            ..SliderConfig::default()
        }
    }

    /// Viewport one item wide over `count` items.
    fn mounted(config: SliderConfig, count: usize) -> Carousel<SimulatedViewport> {
        let viewport = SimulatedViewport::new(layout::content_extent(&config, count), 200.0);
        let mut carousel = Carousel::new(config, count, DirectionSource::unset());
        carousel.mount(viewport);
        carousel
    }

    fn step(carousel: &mut Carousel<SimulatedViewport>) -> Navigation {
        let outcome = carousel.next();
        carousel.on_scroll();
        carousel.settle();
        outcome
    }

    #[test]
    fn test_scenario_a_stops_at_last_item() {
        let mut carousel = mounted(scenario_config(false), 10);
        assert_eq!(
            carousel.edges(),
            EdgeVisibility {
                start: false,
                end: true
            }
        );

        for _ in 0..9 {
            step(&mut carousel);
        }
        assert_eq!(carousel.snapshot().offset, 1944.0);
        assert_eq!(
            carousel.edges(),
            EdgeVisibility {
                start: true,
                end: false
            }
        );

        // without a loop, further steps clamp at the end
        step(&mut carousel);
        assert_eq!(carousel.snapshot().offset, 1944.0);
    }

    #[test]
    fn test_scenario_b_wraps_from_last_item() {
        let mut carousel = mounted(scenario_config(true), 10);
        assert_eq!(carousel.edges(), EdgeVisibility::BOTH);

        for _ in 0..9 {
            step(&mut carousel);
            assert_eq!(carousel.edges(), EdgeVisibility::BOTH);
        }
        assert_eq!(carousel.snapshot().offset, 1944.0);

        assert_eq!(step(&mut carousel), Navigation::Wrapped { target: 0.0 });
        assert_eq!(carousel.snapshot().offset, 0.0);
        assert_eq!(carousel.edges(), EdgeVisibility::BOTH);
    }

    #[test]
    fn test_scenario_c_insufficient_items_disable_loop() {
        let config = SliderConfig {
            items_per_step: 3,
            ..scenario_config(true)
        };
        let mut looped = mounted(config, 2);
        let mut plain = mounted(
            SliderConfig {
                loop_enabled: false,
                ..config
            },
            2,
        );
        assert!(!looped.effective_loop());
        assert_eq!(looped.edges(), plain.edges());

        assert_eq!(looped.previous(), plain.previous());
        looped.on_scroll();
        plain.on_scroll();
        assert_eq!(looped.snapshot(), plain.snapshot());
    }

    #[test]
    fn test_operations_are_noops_before_mount() {
        let mut carousel: Carousel<SimulatedViewport> =
            Carousel::new(scenario_config(true), 10, DirectionSource::unset());

        assert_eq!(carousel.next(), Navigation::Unmoved);
        assert_eq!(carousel.previous(), Navigation::Unmoved);
        assert_eq!(carousel.refresh_edges(), EdgeVisibility::default());
        assert!(!carousel.is_navigating());
        assert!(!carousel.snapshot().mounted);
    }

    #[test]
    fn test_unmount_returns_viewport_and_disables_navigation() {
        let mut carousel = mounted(scenario_config(false), 10);
        carousel.next();

        let viewport = carousel.unmount().unwrap();
        assert_eq!(viewport.offset(), 216.0);
        assert!(!carousel.is_navigating());
        assert_eq!(carousel.next(), Navigation::Unmoved);
    }

    #[test]
    fn test_mount_resets_offset() {
        let mut viewport = SimulatedViewport::new(2144.0, 200.0);
        viewport.set_offset(500.0);
        let mut carousel = Carousel::new(scenario_config(false), 10, DirectionSource::unset());
        carousel.mount(viewport);
        assert_eq!(carousel.snapshot().offset, 0.0);
    }

    #[test]
    fn test_direction_read_per_navigation() {
        let config = scenario_config(false);
        let (tx, source) = DirectionSource::channel(Direction::Ltr);
        let viewport = SimulatedViewport::new(layout::content_extent(&config, 10), 200.0);
        let mut carousel = Carousel::new(config, 10, source);
        carousel.mount(viewport.clone());

        assert_eq!(carousel.next(), Navigation::Stepped { delta: 216.0 });
        carousel.settle();

        tx.send_replace(Direction::Rtl);
        viewport.set_direction(Direction::Rtl);
        assert_eq!(carousel.next(), Navigation::Stepped { delta: -216.0 });
        assert_eq!(viewport.offset(), -432.0);
    }

    #[test]
    fn test_reconfigure_resets_only_on_dependency_change() {
        let config = scenario_config(false);
        let mut carousel = mounted(config, 10);
        step(&mut carousel);
        assert_eq!(carousel.snapshot().offset, 216.0);

        let cosmetic = SliderConfig {
            show_scroll_indicator: false,
            ..config
        };
        assert!(!carousel.reconfigure(cosmetic, 10));
        assert_eq!(carousel.snapshot().offset, 216.0);

        let looped = SliderConfig {
            loop_enabled: true,
            ..config
        };
        assert!(carousel.reconfigure(looped, 10));
        assert_eq!(carousel.snapshot().offset, 0.0);
        assert_eq!(carousel.edges(), EdgeVisibility::BOTH);
    }
}
