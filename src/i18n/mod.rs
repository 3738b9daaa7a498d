// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations live in Fluent `.ftl` files embedded at compile time, grouped into
//! named translation lists (one file per list and language). The active language
//! is owned by a [`LanguageProvider`] created by the application root.
//!
//! # Features
//!
//! - Closed set of supported [`Language`]s with BCP-47 tags
//! - Startup language resolution from CLI, stored preference, config or OS locale
//! - Runtime language switching with persistence of the chosen tag
//! - Fixed fallback locale when no language is active

pub mod fluent;
pub mod provider;

pub use fluent::LanguageList;
pub use provider::LanguageProvider;

use crate::app::config::Config;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    PtBr,
    EnUs,
}

impl Language {
    /// Every supported language, in picker order.
    pub const ALL: &'static [Language] = &[Language::PtBr, Language::EnUs];

    /// Locale used by `translate` when no language is active.
    pub const FALLBACK: Language = Language::PtBr;

    /// Language a provider starts with when nothing else resolves.
    pub const DEFAULT: Language = Language::EnUs;

    /// BCP-47 tag, as written to storage.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::PtBr => "pt-BR",
            Language::EnUs => "en-US",
        }
    }

    /// Parses a locale tag. Only the primary language subtag is significant, so
    /// `pt`, `pt-br` and `pt-PT` all resolve to [`Language::PtBr`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let id: LanguageIdentifier = tag.replace('_', "-").parse().ok()?;
        match id.language.as_str() {
            "pt" => Some(Language::PtBr),
            "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        self.tag().parse().unwrap_or_default()
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::PtBr => "Português (Brasil)",
            Language::EnUs => "English (US)",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// Picks the language the provider starts with.
///
/// Order: CLI flag, value previously stored under the storage key, configured
/// default, OS locale, then [`Language::DEFAULT`].
pub fn resolve_language(cli_lang: Option<&str>, stored: Option<&str>, config: &Config) -> Language {
    if let Some(lang) = cli_lang.and_then(Language::from_tag) {
        return lang;
    }

    if let Some(lang) = stored.and_then(Language::from_tag) {
        return lang;
    }

    if let Some(lang) = config
        .general
        .default_language
        .as_deref()
        .and_then(Language::from_tag)
    {
        return lang;
    }

    if let Some(lang) = sys_locale::get_locale().as_deref().and_then(Language::from_tag) {
        return lang;
    }

    Language::DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn tags_round_trip_through_from_tag() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.tag()), Some(*language));
        }
    }

    #[test]
    fn from_tag_ignores_case_and_region() {
        assert_eq!(Language::from_tag("pt-br"), Some(Language::PtBr));
        assert_eq!(Language::from_tag("pt"), Some(Language::PtBr));
        assert_eq!(Language::from_tag("en_GB"), Some(Language::EnUs));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag("not a tag"), None);
    }

    #[test]
    fn resolve_language_prefers_cli() {
        let config = Config::default();
        let lang = resolve_language(Some("pt-BR"), Some("en-US"), &config);
        assert_eq!(lang, Language::PtBr);
    }

    #[test]
    fn resolve_language_uses_stored_value_before_config() {
        let mut config = Config::default();
        config.general.default_language = Some("en-US".to_string());
        let lang = resolve_language(None, Some("pt-BR"), &config);
        assert_eq!(lang, Language::PtBr);
    }

    #[test]
    fn resolve_language_skips_unsupported_values() {
        let mut config = Config::default();
        config.general.default_language = Some("pt-BR".to_string());
        let lang = resolve_language(Some("de"), Some("ja"), &config);
        assert_eq!(lang, Language::PtBr);
    }

    #[test]
    fn resolve_language_always_returns_supported_language() {
        // Falls through to the OS locale, which depends on the host.
        let lang = resolve_language(None, None, &Config::default());
        assert!(Language::ALL.contains(&lang));
    }
}
