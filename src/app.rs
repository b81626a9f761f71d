use ratatui::style::Color;
use tokio::sync::watch;

use carousel::config::SliderConfig;
use carousel::controller::Navigation;
use carousel::direction::{Direction, DirectionSource};
use carousel::edge::EdgeVisibility;
use carousel::layout;
use carousel::scroll::WheelAccumulator;
use carousel::viewport::SimulatedViewport;

use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::SLIDE_COLORS;

/// Pixels per terminal column
pub const PX_PER_COLUMN: f64 = 8.0;
/// Pixels per terminal row
pub const PX_PER_ROW: f64 = 22.0;

/// Smooth-scroll animation length of the demo viewport
pub const ANIMATION_MS: u64 = 300;

/// Screen rectangle used for hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<ratatui::layout::Rect> for ClickRegion {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// One demo slide
#[derive(Debug, Clone)]
pub struct Slide {
    pub label: String,
    pub color: Color,
}

impl Slide {
    pub fn numbered(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide {
                label: format!("Slide {}", i + 1),
                color: SLIDE_COLORS[i % SLIDE_COLORS.len()],
            })
            .collect()
    }
}

pub struct App {
    pub config: SliderConfig,
    pub slides: Vec<Slide>,
    pub direction: Direction,
    direction_tx: watch::Sender<Direction>,
    /// Renderer's clone of the viewport driven by the slider runtime
    pub viewport: SimulatedViewport,
    pub edges: EdgeVisibility,
    pub interactions: InteractionRegistry,
    pub wheel: WheelAccumulator,
    pub last_navigation: Option<Navigation>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: SliderConfig, item_count: usize, direction: Direction) -> (Self, DirectionSource) {
        let slides = Slide::numbered(item_count);
        let viewport = SimulatedViewport::new(layout::content_extent(&config, slides.len()), 0.0)
            .with_animation(std::time::Duration::from_millis(ANIMATION_MS))
            .with_direction(direction);
        let (direction_tx, source) = DirectionSource::channel(direction);

        let app = Self {
            config,
            slides,
            direction,
            direction_tx,
            viewport,
            edges: EdgeVisibility::default(),
            interactions: InteractionRegistry::new(),
            wheel: WheelAccumulator::default(),
            last_navigation: None,
            should_quit: false,
        };
        (app, source)
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
        self.direction_tx.send_replace(self.direction);
        self.viewport.set_direction(self.direction);
    }

    /// Edit the slider config and keep the viewport's content length in sync.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut SliderConfig)) -> SliderConfig {
        let mut config = self.config;
        edit(&mut config);
        if config.validate().is_ok() {
            self.config = config;
            self.viewport
                .set_content_extent(layout::content_extent(&self.config, self.slides.len()));
        }
        self.config
    }

    /// Visible strip width changed.
    pub fn set_strip_columns(&mut self, columns: u16) {
        self.viewport.set_viewport_extent(columns as f64 * PX_PER_COLUMN);
    }

    pub fn record(&mut self, navigation: Navigation) {
        self.last_navigation = Some(navigation);
    }
}
