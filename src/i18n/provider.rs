// SPDX-License-Identifier: MPL-2.0
//! Active-language state and translation lookup.

use super::{Language, LanguageList};
use crate::app::local_storage::LocalStorage;
use crate::error::{Error, Result};

/// Owns the active language and resolves keys against translation lists.
///
/// One instance is created by the application root and handed to the views
/// that need it; see [`crate::ui::context::Providers`].
#[derive(Debug)]
pub struct LanguageProvider {
    active: Option<Language>,
    storage_key: String,
    storage: LocalStorage,
}

impl LanguageProvider {
    pub fn new(active: Option<Language>, storage_key: impl Into<String>, storage: LocalStorage) -> Self {
        Self {
            active,
            storage_key: storage_key.into(),
            storage,
        }
    }

    /// The active language, or [`Language::FALLBACK`] when none is set.
    #[must_use]
    pub fn language(&self) -> Language {
        self.active.unwrap_or(Language::FALLBACK)
    }

    #[must_use]
    pub fn active(&self) -> Option<Language> {
        self.active
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[must_use]
    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Writes the tag under the storage key, then switches the active language.
    ///
    /// A failed write is logged; the switch happens regardless.
    pub fn set_language(&mut self, language: Language) {
        if let Err(err) = self.storage.set_item(&self.storage_key, language.tag()) {
            log::warn!("Failed to persist language {}: {}", language.tag(), err);
        }
        self.active = Some(language);
        log::debug!("Active language set to {}", language.tag());
    }

    /// Resolves `key` in `list` for the active language.
    ///
    /// `None` yields an empty string. A missing key or locale yields
    /// `MISSING: <key>` and a warning.
    #[must_use]
    pub fn translate(&self, key: Option<&str>, list: &LanguageList) -> String {
        match self.try_translate(key, list) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{} (list '{}')", err, list.name());
                format!("MISSING: {}", key.unwrap_or_default())
            }
        }
    }

    /// Like [`translate`](Self::translate) but reports misses as
    /// [`Error::MissingTranslation`].
    pub fn try_translate(&self, key: Option<&str>, list: &LanguageList) -> Result<String> {
        let Some(key) = key else {
            return Ok(String::new());
        };

        let language = self.language();
        list.get(key, language)
            .ok_or_else(|| Error::MissingTranslation {
                key: key.to_string(),
                language,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::DEFAULT_LANGUAGE_STORAGE_KEY;
    use tempfile::tempdir;

    fn sample_list() -> LanguageList {
        LanguageList::from_sources(
            "sample",
            [
                (
                    Language::PtBr,
                    "toggle-theme = Alternar tema\nconversion_table = Tabela de conversão",
                ),
                (
                    Language::EnUs,
                    "toggle-theme = Toggle theme\nconversion_table = Conversion table",
                ),
            ],
        )
        .expect("sample list parses")
    }

    fn provider(active: Option<Language>) -> LanguageProvider {
        LanguageProvider::new(active, DEFAULT_LANGUAGE_STORAGE_KEY, LocalStorage::in_memory())
    }

    #[test]
    fn translate_returns_entry_for_active_language() {
        let list = sample_list();
        for language in Language::ALL {
            let provider = provider(Some(*language));
            for key in ["toggle-theme", "conversion_table"] {
                assert_eq!(
                    provider.translate(Some(key), &list),
                    list.get(key, *language).unwrap()
                );
            }
        }
        assert_eq!(
            provider(Some(Language::EnUs)).translate(Some("toggle-theme"), &list),
            "Toggle theme"
        );
    }

    #[test]
    fn translate_none_key_is_empty() {
        let list = sample_list();
        assert_eq!(provider(Some(Language::EnUs)).translate(None, &list), "");
        assert_eq!(provider(None).translate(None, &LanguageList::empty("x")), "");
    }

    #[test]
    fn translate_without_active_language_uses_fallback_locale() {
        let provider = provider(None);
        assert_eq!(provider.language(), Language::PtBr);
        assert_eq!(
            provider.translate(Some("toggle-theme"), &sample_list()),
            "Alternar tema"
        );
    }

    #[test]
    fn translate_marks_missing_keys() {
        let provider = provider(Some(Language::EnUs));
        assert_eq!(
            provider.translate(Some("unknown"), &sample_list()),
            "MISSING: unknown"
        );
    }

    #[test]
    fn try_translate_reports_missing_locale() {
        let list = LanguageList::from_sources("en-only", [(Language::EnUs, "hello = Hello")]).unwrap();
        let provider = provider(Some(Language::PtBr));
        let err = provider.try_translate(Some("hello"), &list).unwrap_err();
        assert_eq!(
            err,
            Error::MissingTranslation {
                key: "hello".to_string(),
                language: Language::PtBr,
            }
        );
    }

    #[test]
    fn set_language_updates_active_language() {
        let mut provider = provider(Some(Language::EnUs));
        provider.set_language(Language::PtBr);
        assert_eq!(provider.active(), Some(Language::PtBr));
        assert_eq!(
            provider.storage().get_item(DEFAULT_LANGUAGE_STORAGE_KEY),
            Some("pt-BR")
        );
    }

    #[test]
    fn set_language_switches_even_when_storage_write_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").expect("failed to write blocker file");

        let path = blocker.join("sub").join("local_storage.cbor");
        let (storage, warning) = LocalStorage::open(path.clone());
        assert!(warning.is_none());

        let mut provider = LanguageProvider::new(Some(Language::EnUs), "k", storage);
        provider.set_language(Language::PtBr);

        assert_eq!(provider.active(), Some(Language::PtBr));
        assert_eq!(provider.storage().get_item("k"), Some("pt-BR"));
        assert!(!path.exists());
    }

    #[test]
    fn set_language_persists_tag_under_configured_key() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("local_storage.cbor");
        let (storage, warning) = LocalStorage::open(path.clone());
        assert!(warning.is_none());

        let mut provider = LanguageProvider::new(None, "custom-language-key", storage);
        provider.set_language(Language::EnUs);

        let (reloaded, warning) = LocalStorage::open(path);
        assert!(warning.is_none());
        assert_eq!(reloaded.get_item("custom-language-key"), Some("en-US"));
        assert_eq!(reloaded.get_item(DEFAULT_LANGUAGE_STORAGE_KEY), None);
    }
}
