// SPDX-License-Identifier: MPL-2.0
//! One reference table: utility class, pixels and rem per spacing token.

use super::data::{format_px, format_rem, ConversionRow};
use super::selection::Selection;
use crate::ui::design_tokens::{dimmed, palette, sizing, spacing, typography};
use iced::widget::{text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Translated column headers.
#[derive(Debug, Clone)]
pub struct Headers {
    pub class: String,
    pub pixels: String,
    pub rem: String,
}

pub struct ViewContext<'a> {
    pub rows: &'a [ConversionRow],
    pub selection: Selection,
    pub headers: Headers,
}

/// Cell texts for `row` under `selection`.
#[must_use]
pub fn cells(row: &ConversionRow, selection: Selection) -> [String; 3] {
    [
        selection.class_for(row.token),
        format_px(row.px),
        format_rem(row.rem),
    ]
}

/// Whether `row` is drawn dimmed because it does not apply to `selection`.
#[must_use]
pub fn is_dimmed(row: &ConversionRow, selection: Selection) -> bool {
    !row.usage.allows(selection)
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = table_row(
        [ctx.headers.class, ctx.headers.pixels, ctx.headers.rem],
        typography::CAPTION,
        false,
    );

    let body = ctx.rows.iter().fold(Column::new(), |column, row| {
        column.push(table_row(
            cells(row, ctx.selection),
            typography::BODY,
            is_dimmed(row, ctx.selection),
        ))
    });

    let table = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(body.spacing(spacing::XXS));

    Container::new(table).padding(spacing::SM).into()
}

fn table_row<'a, Message: 'a>(
    [class, pixels, rem]: [String; 3],
    size: f32,
    is_dimmed: bool,
) -> Element<'a, Message> {
    let class_cell = cell(class, size, is_dimmed).style(move |theme: &Theme| text::Style {
        color: Some(if is_dimmed {
            dimmed(theme.extended_palette().background.base.text)
        } else {
            palette::PRIMARY_500
        }),
    });

    Row::new()
        .spacing(spacing::MD)
        .push(class_cell)
        .push(cell(pixels, size, is_dimmed))
        .push(cell(rem, size, is_dimmed))
        .into()
}

fn cell<'a>(content: String, size: f32, is_dimmed: bool) -> Text<'a> {
    Text::new(content)
        .size(size)
        .width(Length::Fixed(sizing::TABLE_COLUMN_WIDTH))
        .style(move |theme: &Theme| {
            let color = theme.extended_palette().background.base.text;
            text::Style {
                color: Some(if is_dimmed { dimmed(color) } else { color }),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::conversion::data::{FIRST_HALF, SECOND_HALF};
    use crate::ui::conversion::selection::Side;

    fn headers() -> Headers {
        Headers {
            class: "Class".into(),
            pixels: "Pixels".into(),
            rem: "Rem".into(),
        }
    }

    #[test]
    fn cells_follow_selection_prefix() {
        let row = &FIRST_HALF[2];
        assert_eq!(
            cells(row, Selection::Padding(Side::Y)),
            ["py-0.5".to_string(), "2px".to_string(), "0.125rem".to_string()]
        );
        assert_eq!(cells(row, Selection::Gap)[0], "gap-0.5");
    }

    #[test]
    fn auto_row_is_dimmed_outside_margins() {
        let auto = SECOND_HALF.last().expect("second half is not empty");
        assert_eq!(
            cells(auto, Selection::Margin(Side::X)),
            ["mx-auto".to_string(), "auto".to_string(), "auto".to_string()]
        );
        assert!(!is_dimmed(auto, Selection::Margin(Side::X)));
        assert!(is_dimmed(auto, Selection::Padding(Side::All)));
        assert!(is_dimmed(auto, Selection::Gap));
        assert!(!is_dimmed(&FIRST_HALF[0], Selection::Gap));
    }

    #[test]
    fn view_renders_dimmed_rows() {
        let ctx = ViewContext {
            rows: SECOND_HALF,
            selection: Selection::Gap,
            headers: headers(),
        };
        let _element: Element<'_, ()> = view(ctx);
    }

    #[test]
    fn view_renders() {
        let ctx = ViewContext {
            rows: FIRST_HALF,
            selection: Selection::Margin(Side::Top),
            headers: headers(),
        };
        let _element: Element<'_, ()> = view(ctx);
    }

    #[test]
    fn view_renders_empty_table() {
        let ctx = ViewContext {
            rows: &[],
            selection: Selection::Gap,
            headers: headers(),
        };
        let _element: Element<'_, ()> = view(ctx);
    }
}
