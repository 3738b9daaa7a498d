// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Resolution Order
//!
//! Both the data directory (local storage) and the config directory
//! (`settings.toml`) are resolved the same way:
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI arguments** `--data-dir` / `--config-dir`, set via [`init_cli_overrides`]
//! 3. **Environment variables** `FRONT_FLOW_DATA_DIR` / `FRONT_FLOW_CONFIG_DIR`
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "FrontFlow";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "FRONT_FLOW_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FRONT_FLOW_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` values. Only the first call has
/// an effect.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if !set_overrides(&CLI_DATA_DIR, &CLI_CONFIG_DIR, data_dir, config_dir) {
        log::warn!("CLI directory overrides were already initialized; ignoring");
    }
}

/// Fills both cells independently. Returns false if either was already set.
fn set_overrides(
    data_cell: &OnceLock<Option<PathBuf>>,
    config_cell: &OnceLock<Option<PathBuf>>,
    data_dir: Option<String>,
    config_dir: Option<String>,
) -> bool {
    let data_set = data_cell.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = config_cell.set(config_dir.map(PathBuf::from)).is_ok();
    data_set && config_set
}

/// Platform-specific data directory, e.g. `~/.local/share/FrontFlow/` on Linux.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Platform-specific config directory, e.g. `~/.config/FrontFlow/` on Linux.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
