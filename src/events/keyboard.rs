//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Navigation - vim style and arrows
        KeyCode::Char('h') | KeyCode::Left => Action::Previous,
        KeyCode::Char('l') | KeyCode::Right => Action::Next,

        KeyCode::Char('d') => Action::ToggleDirection,
        KeyCode::Char('o') => Action::ToggleLoop,
        KeyCode::Char('a') => Action::ToggleAutoplay,
        KeyCode::Char('s') => Action::ToggleScrollIndicator,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::IncreaseStep,
        KeyCode::Char('-') => Action::DecreaseStep,
        KeyCode::Char(']') => Action::IncreaseGap,
        KeyCode::Char('[') => Action::DecreaseGap,
        KeyCode::Char('>') => Action::IncreaseInterval,
        KeyCode::Char('<') => Action::DecreaseInterval,

        _ => Action::None,
    }
}
