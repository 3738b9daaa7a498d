// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: application title, language picker and theme toggle.

use crate::i18n::{Language, LanguageList};
use crate::ui::components::error_display;
use crate::ui::context::Providers;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme_toggle;
use iced::alignment::Vertical;
use iced::widget::{container, pick_list, Container, Row, Space, Text};
use iced::{Border, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub providers: Providers<'a>,
    pub labels: &'a LanguageList,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(Language),
    ThemeToggle(theme_toggle::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageSelected(Language),
    ThemeToggle(theme_toggle::Message),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(language) => Event::LanguageSelected(language),
        Message::ThemeToggle(message) => Event::ThemeToggle(message),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let language = match ctx.providers.use_language() {
        Ok(language) => language,
        Err(err) => return error_display::view(&err),
    };
    let tr = |key: &str| language.translate(Some(key), ctx.labels);

    let title = Text::new(tr("app-title")).size(typography::TITLE_MD);

    let picker = pick_list(
        Language::ALL,
        language.active(),
        Message::LanguageSelected,
    )
    .placeholder(tr("select-language"))
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH));

    let toggle = theme_toggle::view(theme_toggle::ViewContext {
        providers: ctx.providers,
        labels: ctx.labels,
    })
    .map(Message::ThemeToggle);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(tr("language-label")).size(typography::BODY))
        .push(picker)
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}
