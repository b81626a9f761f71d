//! Domain error types for carousel
//!
//! Navigation itself never fails; these cover the fallible edges:
//! - `ConfigError` for configuration files and values
//! - `SliderError` as the top-level error type

use thiserror::Error;

/// Top-level error type for carousel
#[derive(Debug, Error)]
pub enum SliderError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slider is not mounted")]
    Unmounted,
}

/// Errors related to slider configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SliderError
pub type Result<T> = std::result::Result<T, SliderError>;
