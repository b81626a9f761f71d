//! Periodic "next" requests.
//!
//! The first tick fires one full interval after the timer is created and
//! then every interval after that. A tick that lands while a navigation is in
//! flight is skipped; the schedule itself is never reset by navigation.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::config::SliderConfig;

/// What to do with an autoplay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Fire,
    Skip,
}

impl Tick {
    pub fn decide(navigating: bool) -> Self {
        if navigating { Tick::Skip } else { Tick::Fire }
    }
}

/// Autoplay timer. Disabled timers never tick.
#[derive(Debug)]
pub struct Autoplay {
    timer: Option<Interval>,
}

impl Autoplay {
    pub fn disabled() -> Self {
        Self { timer: None }
    }

    /// Start the timer if `config` enables autoplay.
    pub fn from_config(config: &SliderConfig) -> Self {
        if config.autoplay_enabled {
            Self::start(config.autoplay_interval())
        } else {
            Self::disabled()
        }
    }

    pub fn start(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { timer: Some(timer) }
    }

    pub fn is_enabled(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.timer.as_ref().map(Interval::period)
    }

    /// Wait for the next tick. Pending forever while disabled.
    pub async fn tick(&mut self) -> Instant {
        match self.timer.as_mut() {
            Some(timer) => timer.tick().await,
            None => std::future::pending().await,
        }
    }
}
