// SPDX-License-Identifier: MPL-2.0
//! Preference persistence triggered from the update loop.

use super::config;
use super::Message;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Writes the selected theme mode to `settings.toml`.
///
/// Skipped under `cfg(test)`: unit tests drive `App::update` and must not touch
/// the user's config directory.
pub fn persist_theme(theme_mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    write_theme_mode(theme_mode, None);
    Task::none()
}

/// Updates `general.theme_mode` in the config under `base_dir`, keeping every
/// other setting. An unreadable file is left untouched.
///
/// Returns whether the file was written.
fn write_theme_mode(theme_mode: ThemeMode, base_dir: Option<PathBuf>) -> bool {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if let Some(warning) = warning {
        log::warn!("Not saving theme mode, config is unreadable: {}", warning);
        return false;
    }
    cfg.general.theme_mode = theme_mode;

    match config::save_with_override(&cfg, base_dir) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("Failed to save config: {}", error);
            false
        }
    }
}
