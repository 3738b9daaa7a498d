// SPDX-License-Identifier: MPL-2.0
//! Pixel-to-rem conversion tables.
//!
//! The user picks a utility family (gap, a padding side or a margin side) and the
//! page shows the static conversion table split across two side-by-side
//! [`info_table`]s, with class names for the selected family.

pub mod data;
pub mod info_table;
pub mod selection;

pub use selection::{Selection, Side, MARGIN_OPTIONS, PADDING_OPTIONS, SELECT_OPTIONS};

use crate::i18n::LanguageList;
use crate::ui::components::error_display;
use crate::ui::context::Providers;
use crate::ui::design_tokens::{sizing, spacing, typography};
use data::{FIRST_HALF, SECOND_HALF};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{pick_list, Column, Row, Text};
use iced::{Element, Length};

/// Local state of the conversion page.
#[derive(Debug, Clone, Default)]
pub struct State {
    selection: Selection,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectionChanged(Selection),
}

pub struct ViewContext<'a> {
    pub providers: Providers<'a>,
    pub labels: &'a LanguageList,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SelectionChanged(selection) => self.selection = selection,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let language = match ctx.providers.use_language() {
            Ok(language) => language,
            Err(err) => return error_display::view(&err),
        };
        let tr = |key: &str| language.translate(Some(key), ctx.labels);

        let title = Text::new(tr("conversion_table")).size(typography::TITLE_LG);

        let picker = pick_list(SELECT_OPTIONS, Some(self.selection), Message::SelectionChanged)
            .placeholder(tr("select_an_option"))
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::SELECT_WIDTH));

        let picker_row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(tr("utility_label")).size(typography::BODY))
            .push(picker);

        let headers = info_table::Headers {
            class: tr("column_class"),
            pixels: tr("column_pixels"),
            rem: tr("column_rem"),
        };

        let tables = Row::new()
            .spacing(spacing::XL)
            .push(info_table::view(info_table::ViewContext {
                rows: FIRST_HALF,
                selection: self.selection,
                headers: headers.clone(),
            }))
            .push(info_table::view(info_table::ViewContext {
                rows: SECOND_HALF,
                selection: self.selection,
                headers,
            }));

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(title)
            .push(picker_row)
            .push(tables)
            .into()
    }
}
