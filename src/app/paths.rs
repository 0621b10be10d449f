// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_COMPARE_DATA_DIR`, `ICED_COMPARE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The data directory holds camera captures; the config directory holds
//! `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedCompare";

/// Subdirectory of the data directory where camera captures are written.
const CAPTURES_DIR: &str = "captures";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_COMPARE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_COMPARE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI directory overrides were already initialized");
    }
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application data directory path with an optional override.
///
/// - Linux: `~/.local/share/IcedCompare/`
/// - macOS: `~/Library/Application Support/IcedCompare/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedCompare\`
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, get_cli_data_dir(), ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the directory where camera captures are stored.
pub fn get_captures_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_data_dir_with_override(override_path).map(|mut path| {
        path.push(CAPTURES_DIR);
        path
    })
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        get_cli_config_dir(),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

fn resolve_dir(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_var: &str,
    platform_default: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.or(cli_path) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_default().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
