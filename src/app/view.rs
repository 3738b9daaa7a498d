// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the conversion page; both receive the same provider
//! handles.

use super::Message;
use crate::i18n::LanguageList;
use crate::ui::context::Providers;
use crate::ui::conversion::{self, State as ConversionState};
use crate::ui::navbar;
use iced::widget::{scrollable, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub providers: Providers<'a>,
    pub navbar_labels: &'a LanguageList,
    pub px_rem_labels: &'a LanguageList,
    pub conversion: &'a ConversionState,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        providers: ctx.providers,
        labels: ctx.navbar_labels,
    })
    .map(Message::Navbar);

    let conversion_view = ctx
        .conversion
        .view(conversion::ViewContext {
            providers: ctx.providers,
            labels: ctx.px_rem_labels,
        })
        .map(Message::Conversion);

    let column = Column::new()
        .push(navbar_view)
        .push(scrollable(conversion_view).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
