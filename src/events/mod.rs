//! Event handling for the demo host.
//!
//! Terminal events are translated into [`Action`]s; the main loop applies
//! them to the app and forwards navigation to the slider runtime.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
