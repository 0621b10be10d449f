// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::compare;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(compare::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Up to two image paths preloaded as the comparison pair.
    pub file_paths: Vec<String>,
    /// Optional data directory override (camera captures).
    /// Takes precedence over `ICED_COMPARE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_COMPARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional camera device index, overriding `[camera] device_index`.
    pub camera_index: Option<u32>,
}
