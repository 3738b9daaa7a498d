// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` is the composition root: it owns the language and theme providers,
//! the translation lists and the conversion page state, and hands them to the
//! views explicitly. Persistence side effects (language tag in local storage,
//! theme mode in `settings.toml`) happen here, inside the update loop.

pub mod config;
pub mod local_storage;
mod message;
pub mod paths;
mod persistence;
mod view;

pub use message::{Flags, Message};

use crate::i18n::{resolve_language, Language, LanguageList, LanguageProvider};
use crate::ui::context::Providers;
use crate::ui::conversion;
use crate::ui::navbar;
use crate::ui::theme_toggle;
use crate::ui::theming::{ThemeMode, ThemeProvider};
use config::{
    DEFAULT_LANGUAGE_STORAGE_KEY, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT,
    WINDOW_DEFAULT_WIDTH,
};
use iced::{window, Element, Task, Theme};
use local_storage::LocalStorage;
use std::fmt;

/// Root Iced application state.
pub struct App {
    language: LanguageProvider,
    theme: ThemeProvider,
    navbar_labels: LanguageList,
    px_rem_labels: LanguageList,
    conversion: conversion::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.language.active())
            .field("theme", &self.theme.theme())
            .field("selection", &self.conversion.selection())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Loads an embedded translation list, degrading to an empty one.
fn load_list(name: &'static str) -> LanguageList {
    LanguageList::load(name).unwrap_or_else(|err| {
        log::error!("Failed to load translation list '{}': {}", name, err);
        LanguageList::empty(name)
    })
}

impl Default for App {
    fn default() -> Self {
        Self {
            language: LanguageProvider::new(
                Some(Language::DEFAULT),
                DEFAULT_LANGUAGE_STORAGE_KEY,
                LocalStorage::in_memory(),
            ),
            theme: ThemeProvider::default(),
            navbar_labels: load_list(LanguageList::NAVBAR),
            px_rem_labels: load_list(LanguageList::PX_REM),
            conversion: conversion::State::new(),
        }
    }
}

impl App {
    /// Resolves directories, reads config and local storage, and picks the
    /// initial language.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("Using default configuration: {}", warning);
        }

        let (storage, storage_error) = LocalStorage::load();
        if let Some(error) = storage_error {
            log::warn!("Local storage unavailable or unreadable: {}", error);
        }

        let storage_key = config.language_storage_key().to_string();
        let stored = storage.get_item(&storage_key).map(str::to_owned);
        let language = resolve_language(flags.lang.as_deref(), stored.as_deref(), &config);
        log::info!("Starting with language {}", language.tag());

        let app = App {
            language: LanguageProvider::new(Some(language), storage_key, storage),
            theme: ThemeProvider::new(config.general.theme_mode),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.language
            .translate(Some("app-title"), &self.navbar_labels)
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn providers(&self) -> Providers<'_> {
        Providers::new(&self.language, &self.theme)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message) {
                navbar::Event::LanguageSelected(language) => {
                    self.language.set_language(language);
                    Task::none()
                }
                navbar::Event::ThemeToggle(message) => {
                    let theme_toggle::Event::ThemeChanged(mode) =
                        theme_toggle::update(message, &mut self.theme);
                    persistence::persist_theme(mode)
                }
            },
            Message::Conversion(message) => {
                self.conversion.update(message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            providers: self.providers(),
            navbar_labels: &self.navbar_labels,
            px_rem_labels: &self.px_rem_labels,
            conversion: &self.conversion,
        })
    }

    #[must_use]
    pub fn language(&self) -> &LanguageProvider {
        &self.language
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.theme()
    }

    #[must_use]
    pub fn selection(&self) -> conversion::Selection {
        self.conversion.selection()
    }
}
