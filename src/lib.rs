//! Scroll-position controller for horizontal sliders.
//!
//! A [`carousel::Carousel`] steps a scrollable [`viewport::Viewport`] by a
//! fixed number of items, wraps around at the ends when looping is enabled
//! and reports which directional controls should be visible. Navigation is
//! single-flight: a request issued while a previous one is still settling
//! is dropped.
//!
//! [`runtime::mount`] runs a carousel on a tokio task that owns the
//! settle timer, the autoplay timer and the scroll/resize subscriptions.

pub mod autoplay;
pub mod boundary;
pub mod carousel;
pub mod config;
pub mod controller;
pub mod direction;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod runtime;
pub mod scroll;
pub mod viewport;

pub use carousel::{Carousel, ScrollState};
pub use config::SliderConfig;
pub use controller::{Navigation, Step};
pub use direction::Direction;
pub use edge::EdgeVisibility;
pub use error::{Result, SliderError};
pub use runtime::{SliderHandle, mount};
