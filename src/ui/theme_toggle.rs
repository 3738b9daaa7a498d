// SPDX-License-Identifier: MPL-2.0
//! Button flipping between the light and dark themes.
//!
//! Shows a sun while the mode is `Light`, a moon while it is `Dark`, and no icon
//! for any other mode. The accessible label is shown as a tooltip.

use crate::i18n::LanguageList;
use crate::ui::components::error_display;
use crate::ui::context::Providers;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{ThemeMode, ThemeProvider};
use iced::widget::{button, container, tooltip, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggle,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeChanged(ThemeMode),
}

pub struct ViewContext<'a> {
    pub providers: Providers<'a>,
    pub labels: &'a LanguageList,
}

/// Which icon the button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

#[must_use]
pub fn icon_for(mode: ThemeMode) -> Option<ToggleIcon> {
    match mode {
        ThemeMode::Light => Some(ToggleIcon::Sun),
        ThemeMode::Dark => Some(ToggleIcon::Moon),
        ThemeMode::System => None,
    }
}

/// Requests the toggled mode from the provider.
pub fn handle_toggle_theme(theme: &mut ThemeProvider) -> Event {
    let next = theme.theme().toggled();
    theme.set_theme(next);
    Event::ThemeChanged(next)
}

pub fn update(message: Message, theme: &mut ThemeProvider) -> Event {
    match message {
        Message::Toggle => handle_toggle_theme(theme),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (language, theme) = match (ctx.providers.use_language(), ctx.providers.use_theme()) {
        (Ok(language), Ok(theme)) => (language, theme),
        (Err(err), _) | (_, Err(err)) => return error_display::view(&err),
    };

    let icon: Element<'a, Message> = match icon_for(theme.theme()) {
        Some(ToggleIcon::Sun) => icons::sized(icons::sun(), sizing::ICON_MD).into(),
        Some(ToggleIcon::Moon) => icons::sized(icons::moon(), sizing::ICON_MD).into(),
        None => Space::new()
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .into(),
    };

    let toggle = button(icon)
        .on_press(Message::Toggle)
        .padding(spacing::XS)
        .style(styles::button::outline);

    let label = language.translate(Some("toggle-theme"), ctx.labels);

    tooltip(
        toggle,
        container(Text::new(label)).padding(spacing::XS).style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::local_storage::LocalStorage;
    use crate::i18n::{Language, LanguageProvider};

    #[test]
    fn toggling_from_light_yields_dark() {
        let mut theme = ThemeProvider::new(ThemeMode::Light);
        let event = update(Message::Toggle, &mut theme);
        assert_eq!(theme.theme(), ThemeMode::Dark);
        assert_eq!(event, Event::ThemeChanged(ThemeMode::Dark));
    }

    #[test]
    fn toggling_from_non_light_yields_light() {
        for mode in [ThemeMode::Dark, ThemeMode::System] {
            let mut theme = ThemeProvider::new(mode);
            let event = handle_toggle_theme(&mut theme);
            assert_eq!(theme.theme(), ThemeMode::Light);
            assert_eq!(event, Event::ThemeChanged(ThemeMode::Light));
        }
    }

    #[test]
    fn exactly_one_icon_for_binary_modes() {
        assert_eq!(icon_for(ThemeMode::Light), Some(ToggleIcon::Sun));
        assert_eq!(icon_for(ThemeMode::Dark), Some(ToggleIcon::Moon));
        assert_eq!(icon_for(ThemeMode::System), None);
    }

    #[test]
    fn view_renders_for_every_mode() {
        let language = LanguageProvider::new(Some(Language::PtBr), "k", LocalStorage::in_memory());
        let labels = LanguageList::load(LanguageList::NAVBAR).unwrap();
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            let theme = ThemeProvider::new(mode);
            let _element = view(ViewContext {
                providers: Providers::new(&language, &theme),
                labels: &labels,
            });
        }
    }

    #[test]
    fn view_renders_error_without_theme_provider() {
        let language = LanguageProvider::new(None, "k", LocalStorage::in_memory());
        let labels = LanguageList::empty(LanguageList::NAVBAR);
        let _element = view(ViewContext {
            providers: Providers::none().with_language(&language),
            labels: &labels,
        });
    }
}
