// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation lists.
//!
//! A [`LanguageList`] maps message keys to one string per [`Language`]. Lists are
//! loaded from `assets/i18n/<tag>/<list>.ftl`, embedded in the binary.

use super::Language;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct LanguageList {
    name: &'static str,
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl fmt::Debug for LanguageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut languages: Vec<_> = self.bundles.keys().map(|l| l.tag()).collect();
        languages.sort_unstable();
        f.debug_struct("LanguageList")
            .field("name", &self.name)
            .field("languages", &languages)
            .finish()
    }
}

impl LanguageList {
    /// Strings shown in the navigation bar and window title.
    pub const NAVBAR: &'static str = "navbar";
    /// Strings of the pixel-to-rem page.
    pub const PX_REM: &'static str = "px-rem";

    /// Loads the embedded list `name` for every language that ships a file for it.
    pub fn load(name: &'static str) -> Result<Self> {
        let mut sources = Vec::new();
        for language in Language::ALL {
            let path = format!("{}/{}.ftl", language.tag(), name);
            if let Some(file) = Asset::get(&path) {
                let content = String::from_utf8_lossy(file.data.as_ref()).into_owned();
                sources.push((*language, content));
            }
        }
        Self::from_sources(name, sources)
    }

    /// Builds a list from raw FTL sources.
    pub fn from_sources<S>(
        name: &'static str,
        sources: impl IntoIterator<Item = (Language, S)>,
    ) -> Result<Self>
    where
        S: Into<String>,
    {
        let mut bundles = HashMap::new();

        for (language, source) in sources {
            let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
                Error::Translation(format!("{}/{}: {:?}", language.tag(), name, errors))
            })?;

            let mut bundle = FluentBundle::new(vec![language.langid()]);
            bundle.set_use_isolating(false);
            bundle.add_resource(resource).map_err(|errors| {
                Error::Translation(format!("{}/{}: {:?}", language.tag(), name, errors))
            })?;

            bundles.insert(language, bundle);
        }

        Ok(Self { name, bundles })
    }

    /// A list with no entries; every lookup misses.
    #[must_use]
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            bundles: HashMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn contains(&self, key: &str, language: Language) -> bool {
        self.bundles
            .get(&language)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    /// Returns the string for `key` in `language`, or `None` when either is absent.
    #[must_use]
    pub fn get(&self, key: &str, language: Language) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            None
        }
    }
}
