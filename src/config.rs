//! Slider configuration and configuration file support.
//!
//! The demo host loads `~/.config/carousel/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/carousel/config.toml
//! direction = "rtl"
//! items = 12
//!
//! [slider]
//! item_width = 180
//! items_per_step = 2
//! loop_enabled = true
//! autoplay_enabled = true
//! autoplay_interval_ms = 2500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::ConfigError;

/// Layout and behaviour of one slider. Treated as a snapshot per render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Slot width in pixels
    pub item_width: f64,
    /// Slot height in pixels
    pub item_height: f64,
    /// Items advanced by one previous/next action
    pub items_per_step: usize,
    /// Spacing between adjacent slots in pixels
    pub gap: f64,
    /// Draw the scroll indicator (cosmetic)
    pub show_scroll_indicator: bool,
    /// Wrap to the opposite boundary instead of stopping
    pub loop_enabled: bool,
    /// Advance automatically on a timer
    pub autoplay_enabled: bool,
    /// Autoplay period in milliseconds
    pub autoplay_interval_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            item_width: 200.0,
            item_height: 220.0,
            items_per_step: 3,
            gap: 16.0,
            show_scroll_indicator: true,
            loop_enabled: false,
            autoplay_enabled: false,
            autoplay_interval_ms: 3000,
        }
    }
}

/// The fields whose change re-runs the mount effect (offset reset,
/// resubscription, autoplay timer, edge recomputation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecomputeKey {
    item_width: f64,
    gap: f64,
    items_per_step: usize,
    effective_loop: bool,
    autoplay_enabled: bool,
    autoplay_interval_ms: u64,
    item_count: usize,
}

impl SliderConfig {
    /// Whether wrap-around is usable for `count` items.
    ///
    /// A loop needs strictly more items than one step moves.
    pub fn effective_loop(&self, count: usize) -> bool {
        self.loop_enabled && count > self.items_per_step
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn recompute_key(&self, count: usize) -> RecomputeKey {
        RecomputeKey {
            item_width: self.item_width,
            gap: self.gap,
            items_per_step: self.items_per_step,
            effective_loop: self.effective_loop(count),
            autoplay_enabled: self.autoplay_enabled,
            autoplay_interval_ms: self.autoplay_interval_ms,
            item_count: count,
        }
    }

    /// Reject values that cannot describe a slider.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.item_width.is_finite() || self.item_width <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "item_width",
                reason: format!("must be > 0, got {}", self.item_width),
            });
        }
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "item_height",
                reason: format!("must be > 0, got {}", self.item_height),
            });
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ConfigError::Invalid {
                field: "gap",
                reason: format!("must be >= 0, got {}", self.gap),
            });
        }
        if self.items_per_step == 0 {
            return Err(ConfigError::Invalid {
                field: "items_per_step",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "autoplay_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Demo host configuration file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Slider settings
    pub slider: SliderConfig,

    /// Initial writing direction
    pub direction: Option<Direction>,

    /// Number of demo slides
    pub items: Option<usize>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be used.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.slider.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("carousel")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(items) = overrides.items {
            self.items = Some(items);
        }
        if let Some(direction) = overrides.direction {
            self.direction = Some(direction);
        }
        if overrides.loop_enabled {
            self.slider.loop_enabled = true;
        }
        if let Some(interval) = overrides.autoplay_interval_ms {
            self.slider.autoplay_enabled = true;
            self.slider.autoplay_interval_ms = interval;
        }
        self
    }

    /// Get the initial direction, falling back to environment variable or LTR.
    pub fn direction(&self) -> Direction {
        self.direction.unwrap_or_else(|| {
            Direction::from_attr(std::env::var("CAROUSEL_DIRECTION").ok().as_deref())
        })
    }

    pub fn items(&self) -> usize {
        self.items.unwrap_or(10)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub items: Option<usize>,
    pub direction: Option<Direction>,
    pub loop_enabled: bool,
    pub autoplay_interval_ms: Option<u64>,
}
