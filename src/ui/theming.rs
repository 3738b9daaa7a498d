// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode and the provider that owns it.

use iced::Theme;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the mode forces a dark theme; `None` for `System`.
    #[must_use]
    pub fn explicit_dark(self) -> Option<bool> {
        match self {
            ThemeMode::Light => Some(false),
            ThemeMode::Dark => Some(true),
            ThemeMode::System => None,
        }
    }

    /// Mode requested by the theme toggle: `Light` becomes `Dark`, anything
    /// else becomes `Light`.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark | ThemeMode::System => ThemeMode::Light,
        }
    }
}

/// Asks the desktop for its color scheme. Defaults to dark on detection error.
fn detect_system_dark() -> bool {
    let dark = !matches!(dark_light::detect(), Ok(dark_light::Mode::Light));
    log::debug!("System color scheme detected as {}", if dark { "dark" } else { "light" });
    dark
}

/// Owns the theme mode; mutated only through [`ThemeProvider::set_theme`].
///
/// The system color scheme is detected on first use in `System` mode and
/// reused afterwards.
#[derive(Debug, Clone, Default)]
pub struct ThemeProvider {
    mode: ThemeMode,
    system_dark: OnceCell<bool>,
}

impl ThemeProvider {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            system_dark: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode
            .explicit_dark()
            .unwrap_or_else(|| *self.system_dark.get_or_init(detect_system_dark))
    }

    /// The Iced theme to paint with.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_system_scheme(mode: ThemeMode, system_dark: bool) -> ThemeProvider {
        let provider = ThemeProvider::new(mode);
        provider.system_dark.set(system_dark).unwrap();
        provider
    }

    #[test]
    fn explicit_dark_only_for_binary_modes() {
        assert_eq!(ThemeMode::Light.explicit_dark(), Some(false));
        assert_eq!(ThemeMode::Dark.explicit_dark(), Some(true));
        assert_eq!(ThemeMode::System.explicit_dark(), None);
    }

    #[test]
    fn toggled_flips_light_and_dark() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn toggled_coerces_system_to_light() {
        assert_eq!(ThemeMode::System.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::System.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn iced_theme_follows_explicit_modes() {
        assert!(matches!(ThemeProvider::new(ThemeMode::Light).iced_theme(), Theme::Light));
        assert!(matches!(ThemeProvider::new(ThemeMode::Dark).iced_theme(), Theme::Dark));
    }

    #[test]
    fn explicit_modes_skip_system_detection() {
        let provider = ThemeProvider::new(ThemeMode::Dark);
        assert!(provider.is_dark());
        assert!(provider.system_dark.get().is_none());
    }

    #[test]
    fn system_mode_uses_cached_scheme() {
        let dark = provider_with_system_scheme(ThemeMode::System, true);
        assert!(matches!(dark.iced_theme(), Theme::Dark));
        assert!(matches!(dark.iced_theme(), Theme::Dark));

        let mut light = provider_with_system_scheme(ThemeMode::System, false);
        assert!(matches!(light.iced_theme(), Theme::Light));
        light.set_theme(ThemeMode::Dark);
        assert!(matches!(light.iced_theme(), Theme::Dark));
    }

    #[test]
    fn system_detection_runs_once() {
        let provider = ThemeProvider::new(ThemeMode::System);
        let first = provider.is_dark();
        assert_eq!(provider.system_dark.get(), Some(&first));
        assert_eq!(provider.is_dark(), first);
    }

    #[test]
    fn provider_set_theme_replaces_mode() {
        let mut provider = ThemeProvider::default();
        assert_eq!(provider.theme(), ThemeMode::System);
        provider.set_theme(ThemeMode::Dark);
        assert_eq!(provider.theme(), ThemeMode::Dark);
    }
}
