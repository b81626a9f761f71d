//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated during each render with the strip and the directional controls.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::tui::interaction::Gesture;

use super::Action;

fn gesture(kind: MouseEventKind) -> Option<Gesture> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Gesture::Click),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Some(Gesture::WheelBack),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Some(Gesture::WheelForward),
        _ => None,
    }
}

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    match gesture(mouse.kind) {
        Some(gesture) => app.interactions.dispatch(gesture, mouse.column, mouse.row),
        None => Action::None,
    }
}
