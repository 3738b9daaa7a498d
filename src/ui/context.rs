// SPDX-License-Identifier: MPL-2.0
//! Explicit provider handles passed down the view tree.
//!
//! The application root owns the [`LanguageProvider`] and [`ThemeProvider`] and
//! hands a [`Providers`] value to each view. A subtree can be given a different
//! provider with [`Providers::with_language`]; the most recently supplied one is
//! what descendants see.

use crate::error::{Error, Result};
use crate::i18n::LanguageProvider;
use crate::ui::theming::ThemeProvider;

#[derive(Debug, Clone, Copy, Default)]
pub struct Providers<'a> {
    language: Option<&'a LanguageProvider>,
    theme: Option<&'a ThemeProvider>,
}

impl<'a> Providers<'a> {
    /// A context with no providers; every accessor fails.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(language: &'a LanguageProvider, theme: &'a ThemeProvider) -> Self {
        Self {
            language: Some(language),
            theme: Some(theme),
        }
    }

    /// Returns a copy in which `language` shadows any outer language provider.
    #[must_use]
    pub fn with_language(self, language: &'a LanguageProvider) -> Self {
        Self {
            language: Some(language),
            ..self
        }
    }

    /// Returns a copy in which `theme` shadows any outer theme provider.
    #[must_use]
    pub fn with_theme(self, theme: &'a ThemeProvider) -> Self {
        Self {
            theme: Some(theme),
            ..self
        }
    }

    /// The nearest language provider.
    ///
    /// # Errors
    ///
    /// [`Error::MissingProvider`] when the subtree was given none.
    pub fn use_language(&self) -> Result<&'a LanguageProvider> {
        self.language
            .ok_or(Error::MissingProvider("LanguageProvider"))
    }

    /// The nearest theme provider.
    ///
    /// # Errors
    ///
    /// [`Error::MissingProvider`] when the subtree was given none.
    pub fn use_theme(&self) -> Result<&'a ThemeProvider> {
        self.theme.ok_or(Error::MissingProvider("ThemeProvider"))
    }
}
