// SPDX-License-Identifier: MPL-2.0
//! Inline error block used when a view cannot render its content.
//!
//! Developer-facing: the error text replaces the component, drawn in the error
//! color. The error is also logged.

use crate::error::Error;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, text, Container, Text};
use iced::{Border, Element, Theme};

pub fn view<'a, Message: 'a>(error: &Error) -> Element<'a, Message> {
    log::error!("Rendering error in place of component: {}", error);

    let message = Text::new(error.to_string())
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        });

    Container::new(message)
        .padding(spacing::SM)
        .style(|_theme: &Theme| container::Style {
            border: Border {
                color: palette::ERROR_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..container::Style::default()
        })
        .into()
}
