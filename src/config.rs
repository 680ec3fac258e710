use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    /// Replacement content table (TOML). Uses the built-in table when unset.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Display settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Capture mouse clicks for item selection
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Modal width as a percentage of the screen
    #[serde(default = "default_modal_width")]
    pub modal_width: u16,

    /// Modal height as a percentage of the screen
    #[serde(default = "default_modal_height")]
    pub modal_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: default_mouse(),
            modal_width: default_modal_width(),
            modal_height: default_modal_height(),
        }
    }
}

fn default_mouse() -> bool {
    true
}

fn default_modal_width() -> u16 {
    60
}

fn default_modal_height() -> u16 {
    60
}

impl UiConfig {
    /// Modal size clamped to something that still fits a frame
    pub fn modal_percent(&self) -> (u16, u16) {
        (
            self.modal_width.clamp(20, 100),
            self.modal_height.clamp(20, 100),
        )
    }
}

impl DashboardConfig {
    /// Load configuration from default path (~/.config/grs-dashboard/config.toml)
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Get the default configuration path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new().map_or_else(
            || PathBuf::from("~/.config/grs-dashboard/config.toml"),
            |dirs| dirs.config_dir().join("grs-dashboard").join("config.toml"),
        )
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: PathBuf) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Generate example configuration file content
    pub fn example() -> String {
        r#"# grs-dashboard configuration
# Place this file at ~/.config/grs-dashboard/config.toml

# Optional replacement for the built-in topic table.
# Every topic referenced by the dashboard lists must be present.
# content_path = "/path/to/content.toml"

[ui]
# Capture mouse clicks for item selection
mouse = true

# Modal size as a percentage of the screen
modal_width = 60
modal_height = 60
"#
        .to_string()
    }
}

/// Garden palette (greens on slate)
pub mod colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(22, 27, 34); // #161b22
    pub const FG: Color = Color::Rgb(209, 213, 219); // #d1d5db gray-300
    pub const DIM: Color = Color::Rgb(107, 114, 128); // #6b7280 gray-500
    pub const BORDER: Color = Color::Rgb(55, 65, 81); // #374151 gray-700
    pub const HIGHLIGHT: Color = Color::Rgb(16, 185, 129); // #10b981 green
    pub const HEADLINE: Color = Color::Rgb(5, 150, 105); // #059669 green-600

    pub const GREEN: Color = Color::Rgb(22, 163, 74); // #16a34a
    pub const RED: Color = Color::Rgb(239, 68, 68); // #ef4444
    pub const BLUE: Color = Color::Rgb(37, 99, 235); // #2563eb
    pub const PURPLE: Color = Color::Rgb(147, 51, 234); // #9333ea
    pub const ORANGE: Color = Color::Rgb(249, 115, 22); // #f97316
    pub const INDIGO: Color = Color::Rgb(79, 70, 229); // #4f46e5

    pub const BAR: Color = Color::Rgb(59, 130, 246); // #3b82f6
    pub const SLICE_CERTIFIED: Color = Color::Rgb(16, 185, 129); // #10b981
    pub const SLICE_OTHER: Color = Color::Rgb(229, 231, 235); // #e5e7eb
}
