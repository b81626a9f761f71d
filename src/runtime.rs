//! Async driver for a mounted slider.
//!
//! [`mount`] moves the viewport into a dedicated task that owns every piece
//! of mutable state: the [`Carousel`], the scroll and resize subscriptions,
//! the settle timer and the autoplay timer. Everything happens inside one
//! `tokio::select!` loop, so no locks are involved and the single-flight
//! check is a plain phase comparison.
//!
//! The returned [`SliderHandle`] sends requests over a channel and waits for
//! the reply. Unmounting (explicitly or by dropping the handle) cancels the
//! task, which releases its subscriptions and timers before exiting.

use std::pin::Pin;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Sleep, sleep};
use tokio_util::sync::CancellationToken;

use crate::autoplay::{Autoplay, Tick};
use crate::carousel::{Carousel, ScrollState};
use crate::config::SliderConfig;
use crate::controller::{Navigation, SETTLE_DELAY, Step};
use crate::direction::DirectionSource;
use crate::edge::EdgeVisibility;
use crate::error::{Result, SliderError};
use crate::log;
use crate::viewport::{ResizeEvent, ResizeNotifier, ScrollEvent, Subscription, Viewport};

/// Request sent from a [`SliderHandle`] to its driver task
#[derive(Debug)]
enum Command {
    Navigate {
        step: Step,
        reply: oneshot::Sender<Navigation>,
    },
    Reconfigure {
        config: SliderConfig,
        item_count: usize,
        reply: oneshot::Sender<bool>,
    },
    Snapshot {
        reply: oneshot::Sender<ScrollState>,
    },
}

/// Host-side handle to a mounted slider
#[derive(Debug)]
pub struct SliderHandle<V> {
    commands: mpsc::Sender<Command>,
    edges: watch::Receiver<EdgeVisibility>,
    cancel: CancellationToken,
    task: Option<JoinHandle<Option<V>>>,
}

/// Mount `viewport` and start driving it. Must be called within a tokio runtime.
pub fn mount<V>(
    viewport: V,
    config: SliderConfig,
    item_count: usize,
    direction: DirectionSource,
    resize: &ResizeNotifier,
) -> SliderHandle<V>
where
    V: Viewport + Send + 'static,
{
    let scroll = viewport.subscribe();
    let mut carousel = Carousel::new(config, item_count, direction);
    carousel.mount(viewport);

    let (edges_tx, edges_rx) = watch::channel(carousel.edges());
    let (commands_tx, commands_rx) = mpsc::channel(32);
    let cancel = CancellationToken::new();

    let driver = Driver {
        autoplay: Autoplay::from_config(carousel.config()),
        carousel,
        scroll: Some(scroll),
        resize: Some(resize.subscribe()),
        resize_source: resize.clone(),
        settle: None,
        edges: edges_tx,
    };
    let task = tokio::spawn(driver.run(commands_rx, cancel.clone()));

    SliderHandle {
        commands: commands_tx,
        edges: edges_rx,
        cancel,
        task: Some(task),
    }
}

impl<V> SliderHandle<V> {
    pub async fn next(&self) -> Result<Navigation> {
        self.navigate(Step::Next).await
    }

    pub async fn previous(&self) -> Result<Navigation> {
        self.navigate(Step::Previous).await
    }

    pub async fn navigate(&self, step: Step) -> Result<Navigation> {
        self.request(|reply| Command::Navigate { step, reply }).await
    }

    /// Apply a fresh config/item snapshot. Returns whether dependent state
    /// (offset, subscriptions, autoplay timer) was rebuilt.
    ///
    /// An invalid config is rejected with [`SliderError::Config`] and the
    /// driver keeps the previous one.
    pub async fn reconfigure(&self, config: SliderConfig, item_count: usize) -> Result<bool> {
        config.validate()?;
        self.request(|reply| Command::Reconfigure {
            config,
            item_count,
            reply,
        })
        .await
    }

    pub async fn snapshot(&self) -> Result<ScrollState> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Current edge visibility, updated as the viewport scrolls and resizes.
    pub fn edges(&self) -> watch::Receiver<EdgeVisibility> {
        self.edges.clone()
    }

    /// Stop the driver and get the viewport back.
    pub async fn unmount(mut self) -> Result<V> {
        self.cancel.cancel();
        let task = self.task.take().ok_or(SliderError::Unmounted)?;
        match task.await {
            Ok(Some(viewport)) => Ok(viewport),
            _ => Err(SliderError::Unmounted),
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| SliderError::Unmounted)?;
        rx.await.map_err(|_| SliderError::Unmounted)
    }
}

impl<V> Drop for SliderHandle<V> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct Driver<V> {
    carousel: Carousel<V>,
    scroll: Option<Subscription<ScrollEvent>>,
    resize: Option<Subscription<ResizeEvent>>,
    resize_source: ResizeNotifier,
    autoplay: Autoplay,
    settle: Option<Pin<Box<Sleep>>>,
    edges: watch::Sender<EdgeVisibility>,
}

impl<V: Viewport> Driver<V> {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>, cancel: CancellationToken) -> Option<V> {
        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => break,

                _ = wait_settle(&mut self.settle) => {
                    self.settle = None;
                    self.carousel.settle();
                }

                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },

                _ = self.autoplay.tick() => self.on_autoplay(),

                event = next_event(&mut self.scroll) => match event {
                    Some(_) => self.refresh_edges(),
                    None => self.scroll = None,
                },

                event = next_event(&mut self.resize) => match event {
                    Some(_) => self.refresh_edges(),
                    None => self.resize = None,
                },
            }
        }

        self.teardown()
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Navigate { step, reply } => {
                let outcome = self.navigate(step);
                let _ = reply.send(outcome);
            }
            Command::Reconfigure {
                config,
                item_count,
                reply,
            } => {
                let changed = self.reconfigure(config, item_count);
                let _ = reply.send(changed);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.carousel.snapshot());
            }
        }
    }

    fn navigate(&mut self, step: Step) -> Navigation {
        let outcome = self.carousel.navigate(step);
        if outcome.issued() {
            self.settle = Some(Box::pin(sleep(SETTLE_DELAY)));
            self.refresh_edges();
        }
        outcome
    }

    fn on_autoplay(&mut self) {
        match Tick::decide(self.carousel.is_navigating()) {
            Tick::Fire => {
                self.navigate(Step::Next);
            }
            Tick::Skip => log::log("autoplay tick skipped: navigation in flight"),
        }
    }

    fn reconfigure(&mut self, config: SliderConfig, item_count: usize) -> bool {
        let changed = self.carousel.reconfigure(config, item_count);
        if changed {
            // Re-run the mount effect: fresh subscriptions and timer.
            self.scroll = self.carousel.viewport().map(|viewport| viewport.subscribe());
            self.resize = Some(self.resize_source.subscribe());
            self.autoplay = Autoplay::from_config(self.carousel.config());
        }
        self.publish(self.carousel.edges());
        changed
    }

    fn refresh_edges(&mut self) {
        let edges = self.carousel.refresh_edges();
        self.publish(edges);
    }

    fn publish(&self, edges: EdgeVisibility) {
        self.edges.send_if_modified(|current| {
            if *current == edges {
                false
            } else {
                *current = edges;
                true
            }
        });
    }

    fn teardown(mut self) -> Option<V> {
        self.settle = None;
        self.autoplay = Autoplay::disabled();
        self.scroll = None;
        self.resize = None;
        self.carousel.unmount()
    }
}

async fn wait_settle(settle: &mut Option<Pin<Box<Sleep>>>) {
    match settle.as_mut() {
        Some(sleep) => sleep.as_mut().await,
        None => std::future::pending().await,
    }
}

async fn next_event<T: Clone>(subscription: &mut Option<Subscription<T>>) -> Option<T> {
    match subscription.as_mut() {
        Some(subscription) => subscription.recv().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{Instant, sleep_until};

    use crate::layout;
    use crate::viewport::SimulatedViewport;

    fn config() -> SliderConfig {
        SliderConfig {
            item_width: 200.0,
            gap: 16.0,
            items_per_step: 1,
            ..SliderConfig::default()
        }
    }

    fn viewport(config: &SliderConfig, count: usize) -> SimulatedViewport {
        SimulatedViewport::new(layout::content_extent(config, count), 200.0)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_flight_until_settle() {
        let config = config();
        let resize = ResizeNotifier::new();
        let handle = mount(viewport(&config, 10), config, 10, DirectionSource::unset(), &resize);
        let start = Instant::now();

        assert_eq!(handle.next().await.unwrap(), Navigation::Stepped { delta: 216.0 });
        assert_eq!(handle.next().await.unwrap(), Navigation::Dropped);
        assert_eq!(handle.snapshot().await.unwrap().offset, 216.0);

        sleep_until(start + ms(499)).await;
        assert_eq!(handle.previous().await.unwrap(), Navigation::Dropped);
        assert!(handle.snapshot().await.unwrap().is_navigating);

        sleep_until(start + ms(501)).await;
        assert!(!handle.snapshot().await.unwrap().is_navigating);
        assert_eq!(handle.next().await.unwrap(), Navigation::Stepped { delta: 216.0 });
        assert_eq!(handle.snapshot().await.unwrap().offset, 432.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_tick_survives_manual_navigation() {
        let config = SliderConfig {
            autoplay_enabled: true,
            autoplay_interval_ms: 3000,
            ..config()
        };
        let resize = ResizeNotifier::new();
        let handle = mount(viewport(&config, 10), config, 10, DirectionSource::unset(), &resize);
        let start = Instant::now();

        sleep_until(start + ms(100)).await;
        assert!(handle.next().await.unwrap().issued());

        sleep_until(start + ms(601)).await;
        let state = handle.snapshot().await.unwrap();
        assert!(!state.is_navigating);
        assert_eq!(state.offset, 216.0);

        sleep_until(start + ms(3001)).await;
        let state = handle.snapshot().await.unwrap();
        assert_eq!(state.offset, 432.0);
        assert!(state.is_navigating);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_skips_tick_during_navigation() {
        let config = SliderConfig {
            autoplay_enabled: true,
            autoplay_interval_ms: 1000,
            ..config()
        };
        let resize = ResizeNotifier::new();
        let handle = mount(viewport(&config, 10), config, 10, DirectionSource::unset(), &resize);
        let start = Instant::now();

        sleep_until(start + ms(800)).await;
        assert!(handle.next().await.unwrap().issued());

        // tick at 1000 lands inside the 800..1300 settle window
        sleep_until(start + ms(1001)).await;
        assert_eq!(handle.snapshot().await.unwrap().offset, 216.0);

        // schedule is unchanged: the next tick is at 2000
        sleep_until(start + ms(1999)).await;
        assert_eq!(handle.snapshot().await.unwrap().offset, 216.0);
        sleep_until(start + ms(2001)).await;
        assert_eq!(handle.snapshot().await.unwrap().offset, 432.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_loops_back_to_start() {
        let config = SliderConfig {
            loop_enabled: true,
            autoplay_enabled: true,
            autoplay_interval_ms: 1000,
            ..config()
        };
        let resize = ResizeNotifier::new();
        let handle = mount(viewport(&config, 4), config, 4, DirectionSource::unset(), &resize);
        let start = Instant::now();

        // 4 items one wide: offsets 216, 432, 648, then wrap to 0
        sleep_until(start + ms(3001)).await;
        assert_eq!(handle.snapshot().await.unwrap().offset, 648.0);
        sleep_until(start + ms(4001)).await;
        assert_eq!(handle.snapshot().await.unwrap().offset, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_edges_follow_scroll_and_resize() {
        let config = config();
        let resize = ResizeNotifier::new();
        let shared = viewport(&config, 10);
        let handle = mount(shared.clone(), config, 10, DirectionSource::unset(), &resize);
        let mut edges = handle.edges();
        assert_eq!(
            *edges.borrow(),
            EdgeVisibility {
                start: false,
                end: true
            }
        );

        handle.next().await.unwrap();
        assert_eq!(*edges.borrow_and_update(), EdgeVisibility::BOTH);

        // widen the viewport so everything fits, then announce the resize
        shared.set_viewport_extent(5000.0);
        resize.notify(5000.0, 220.0);
        edges.changed().await.unwrap();
        let mut current = *edges.borrow_and_update();
        while current != EdgeVisibility::HIDDEN {
            edges.changed().await.unwrap();
            current = *edges.borrow_and_update();
        }
        assert_eq!(current, EdgeVisibility::HIDDEN);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconfigure_starts_autoplay_and_resets_offset() {
        let config = config();
        let resize = ResizeNotifier::new();
        let handle = mount(viewport(&config, 10), config, 10, DirectionSource::unset(), &resize);

        handle.next().await.unwrap();
        sleep(ms(600)).await;
        assert_eq!(handle.snapshot().await.unwrap().offset, 216.0);

        let autoplay = SliderConfig {
            autoplay_enabled: true,
            autoplay_interval_ms: 1000,
            ..config
        };
        let start = Instant::now();
        assert!(handle.reconfigure(autoplay, 10).await.unwrap());
        assert_eq!(handle.snapshot().await.unwrap().offset, 0.0);

        sleep_until(start + ms(1001)).await;
        assert_eq!(handle.snapshot().await.unwrap().offset, 216.0);

        // cosmetic change keeps everything
        let cosmetic = SliderConfig {
            show_scroll_indicator: false,
            ..autoplay
        };
        assert!(!handle.reconfigure(cosmetic, 10).await.unwrap());
        assert_eq!(handle.snapshot().await.unwrap().offset, 216.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconfigure_rejects_invalid_config() {
        let config = config();
        let resize = ResizeNotifier::new();
        let handle = mount(viewport(&config, 10), config, 10, DirectionSource::unset(), &resize);
        handle.next().await.unwrap();

        let invalid = SliderConfig {
            items_per_step: 0,
            ..config
        };
        let result = handle.reconfigure(invalid, 10).await;
        assert!(matches!(result, Err(SliderError::Config(_))));

        // previous config and offset stay in force
        let state = handle.snapshot().await.unwrap();
        assert_eq!(state.offset, 216.0);
        sleep(ms(600)).await;
        assert_eq!(handle.next().await.unwrap(), Navigation::Stepped { delta: 216.0 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_releases_subscriptions() {
        let config = SliderConfig {
            autoplay_enabled: true,
            ..config()
        };
        let resize = ResizeNotifier::new();
        let shared = viewport(&config, 10);
        let handle = mount(shared.clone(), config, 10, DirectionSource::unset(), &resize);
        assert_eq!(shared.subscriber_count(), 1);
        assert_eq!(resize.subscriber_count(), 1);

        handle.next().await.unwrap();
        let returned = handle.unmount().await.unwrap();
        assert_eq!(returned.offset(), 216.0);
        assert_eq!(shared.subscriber_count(), 0);
        assert_eq!(resize.subscriber_count(), 0);

        // no autoplay activity after unmount
        sleep(ms(10_000)).await;
        assert_eq!(shared.offset(), 216.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_driver() {
        let config = config();
        let resize = ResizeNotifier::new();
        let shared = viewport(&config, 10);
        let handle = mount(shared.clone(), config, 10, DirectionSource::unset(), &resize);
        let commands = handle.commands.clone();

        drop(handle);
        sleep(ms(1)).await;
        assert_eq!(shared.subscriber_count(), 0);
        assert!(commands.is_closed());
    }
}
