//! Mouse hit regions registered during render.
//!
//! The slider view registers the slide strip and then its directional
//! controls each frame. A mouse gesture is matched against the regions of
//! the last frame; regions registered later sit on top.

use crate::app::ClickRegion;
use crate::events::Action;

/// Mouse input the slider reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    /// Wheel up or left
    WheelBack,
    /// Wheel down or right
    WheelForward,
}

/// What a region is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Directional control, fires on click
    Control(Action),
    /// Slide strip, turns wheel notches into navigation
    Strip,
}

impl Target {
    fn respond(self, gesture: Gesture) -> Option<Action> {
        match (self, gesture) {
            (Target::Control(action), Gesture::Click) => Some(action),
            (Target::Strip, Gesture::WheelBack) => Some(Action::Wheel(-1)),
            (Target::Strip, Gesture::WheelForward) => Some(Action::Wheel(1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HitRegion {
    pub bounds: ClickRegion,
    pub target: Target,
}

/// Regions of the last rendered frame.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<HitRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register_control(&mut self, bounds: ClickRegion, action: Action) {
        self.regions.push(HitRegion {
            bounds,
            target: Target::Control(action),
        });
    }

    pub fn register_strip(&mut self, bounds: ClickRegion) {
        self.regions.push(HitRegion {
            bounds,
            target: Target::Strip,
        });
    }

    /// Action for `gesture` at (x, y), from the topmost region that handles it.
    pub fn dispatch(&self, gesture: Gesture, x: u16, y: u16) -> Action {
        self.regions
            .iter()
            .rev()
            .filter(|region| region.bounds.contains(x, y))
            .find_map(|region| region.target.respond(gesture))
            .unwrap_or(Action::None)
    }
}
