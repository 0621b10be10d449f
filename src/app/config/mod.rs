// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[compare]` - Display clamp sizes and divider thickness
//! - `[camera]` - Capture device and resolution
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_COMPARE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_compare::app::config::{self, Config};
//!
//! let (config, _warning) = config::load();
//! config::write_if_missing(&config).expect("Failed to write default config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Comparison view settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompareConfig {
    /// Displayed width when the base image is wider than the window.
    #[serde(default = "default_clamp_width")]
    pub clamp_width: f32,

    /// Displayed height when the base image is taller than the window.
    #[serde(default = "default_clamp_height")]
    pub clamp_height: f32,

    /// Thickness of the reveal divider, in pixels.
    #[serde(default = "default_divider_thickness")]
    pub divider_thickness: f32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            clamp_width: DEFAULT_CLAMP_WIDTH,
            clamp_height: DEFAULT_CLAMP_HEIGHT,
            divider_thickness: DEFAULT_DIVIDER_THICKNESS,
        }
    }
}

/// Camera capture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Device index handed to the camera backend.
    #[serde(default = "default_device_index")]
    pub device_index: u32,

    /// Requested capture width.
    #[serde(default = "default_capture_width")]
    pub capture_width: u32,

    /// Requested capture height.
    #[serde(default = "default_capture_height")]
    pub capture_height: u32,

    /// Frames discarded before the kept frame.
    #[serde(default = "default_warmup_frames")]
    pub warmup_frames: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_index: DEFAULT_CAMERA_INDEX,
            capture_width: DEFAULT_CAPTURE_WIDTH,
            capture_height: DEFAULT_CAPTURE_HEIGHT,
            warmup_frames: DEFAULT_WARMUP_FRAMES,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub camera: CameraConfig,
}

impl Config {
    /// Pulls out-of-range values back into their supported bounds so a
    /// hand-edited file cannot break the layout.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.compare.clamp_width = sanitize_clamp(self.compare.clamp_width, DEFAULT_CLAMP_WIDTH);
        self.compare.clamp_height =
            sanitize_clamp(self.compare.clamp_height, DEFAULT_CLAMP_HEIGHT);
        self.compare.divider_thickness = if self.compare.divider_thickness.is_finite() {
            self.compare
                .divider_thickness
                .clamp(0.0, MAX_DIVIDER_THICKNESS)
        } else {
            DEFAULT_DIVIDER_THICKNESS
        };
        self.camera.warmup_frames = self.camera.warmup_frames.min(MAX_WARMUP_FRAMES);
        if self.camera.capture_width == 0 || self.camera.capture_height == 0 {
            self.camera.capture_width = DEFAULT_CAPTURE_WIDTH;
            self.camera.capture_height = DEFAULT_CAPTURE_HEIGHT;
        }
        self
    }
}

fn sanitize_clamp(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_CLAMP_SIZE, MAX_CLAMP_SIZE)
    } else {
        fallback
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_clamp_width() -> f32 {
    DEFAULT_CLAMP_WIDTH
}

fn default_clamp_height() -> f32 {
    DEFAULT_CLAMP_HEIGHT
}

fn default_divider_thickness() -> f32 {
    DEFAULT_DIVIDER_THICKNESS
}

fn default_device_index() -> u32 {
    DEFAULT_CAMERA_INDEX
}

fn default_capture_width() -> u32 {
    DEFAULT_CAPTURE_WIDTH
}

fn default_capture_height() -> u32 {
    DEFAULT_CAPTURE_HEIGHT
}

fn default_warmup_frames() -> u32 {
    DEFAULT_WARMUP_FRAMES
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("warning-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config.sanitized())
}

/// Writes `config` to the default location unless a settings file already
/// exists there, so first-time users get an editable file with every key.
pub fn write_if_missing(config: &Config) -> Result<()> {
    write_if_missing_with_override(config, None)
}

/// Same as [`write_if_missing`] against a custom directory.
pub fn write_if_missing_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) if !path.exists() => save_to_path(config, &path),
        _ => Ok(()),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
