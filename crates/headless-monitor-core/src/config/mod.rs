mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for headless-monitor.
///
/// Loaded from `~/.config/headless-monitor/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exit without waiting for Enter after finishing or on errors.
    pub close: bool,
    /// Values used when the command line omits them.
    pub display: DisplayDefaults,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Fallback target values for the primary monitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayDefaults {
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Scaling in percent (100, 125, 150, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpi: Option<u32>,
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}
