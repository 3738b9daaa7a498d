// SPDX-License-Identifier: MPL-2.0
//! Static pixel-to-rem reference data (Tailwind default spacing scale).

use super::selection::{Family, Selection};
use crate::app::config::ROOT_FONT_SIZE_PX;

/// Utility families a spacing token is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub gap: bool,
    pub padding: bool,
    pub margin: bool,
}

impl Usage {
    pub const ALL: Usage = Usage {
        gap: true,
        padding: true,
        margin: true,
    };

    /// `auto` is only meaningful for margins.
    pub const MARGIN_ONLY: Usage = Usage {
        gap: false,
        padding: false,
        margin: true,
    };

    #[must_use]
    pub fn allows(self, selection: Selection) -> bool {
        match selection.family() {
            Family::Gap => self.gap,
            Family::Padding => self.padding,
            Family::Margin => self.margin,
        }
    }
}

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRow {
    /// Spacing token as written in class names (`4` in `p-4`).
    pub token: &'static str,
    /// `None` for keyword tokens such as `auto`.
    pub px: Option<u16>,
    pub rem: Option<f32>,
    pub usage: Usage,
}

const fn row(token: &'static str, px: u16) -> ConversionRow {
    ConversionRow {
        token,
        px: Some(px),
        rem: Some(px as f32 / ROOT_FONT_SIZE_PX as f32),
        usage: Usage::ALL,
    }
}

const fn keyword(token: &'static str, usage: Usage) -> ConversionRow {
    ConversionRow {
        token,
        px: None,
        rem: None,
        usage,
    }
}

pub const PX_REM_CONVERSION: &[ConversionRow] = &[
    row("0", 0),
    row("px", 1),
    row("0.5", 2),
    row("1", 4),
    row("1.5", 6),
    row("2", 8),
    row("2.5", 10),
    row("3", 12),
    row("3.5", 14),
    row("4", 16),
    row("5", 20),
    row("6", 24),
    row("7", 28),
    row("8", 32),
    row("9", 36),
    row("10", 40),
    row("11", 44),
    row("12", 48),
    row("14", 56),
    row("16", 64),
    row("20", 80),
    row("24", 96),
    row("28", 112),
    row("32", 128),
    row("36", 144),
    row("40", 160),
    row("44", 176),
    row("48", 192),
    row("52", 208),
    row("56", 224),
    row("60", 240),
    row("64", 256),
    row("72", 288),
    row("80", 320),
    row("96", 384),
    keyword("auto", Usage::MARGIN_ONLY),
];

/// Splits `items` at its midpoint; an odd element goes to the first half.
#[must_use]
pub const fn split_halves<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

const HALVES: (&[ConversionRow], &[ConversionRow]) = split_halves(PX_REM_CONVERSION);

/// Left-hand table rows.
pub const FIRST_HALF: &[ConversionRow] = HALVES.0;
/// Right-hand table rows.
pub const SECOND_HALF: &[ConversionRow] = HALVES.1;

/// Shown in the pixel and rem columns of keyword rows.
pub const KEYWORD_VALUE: &str = "auto";

/// Formats a rem value without trailing zeros, e.g. `0.125rem`, `1rem`.
#[must_use]
pub fn format_rem(rem: Option<f32>) -> String {
    rem.map_or_else(|| KEYWORD_VALUE.to_string(), |rem| format!("{}rem", rem))
}

#[must_use]
pub fn format_px(px: Option<u16>) -> String {
    px.map_or_else(|| KEYWORD_VALUE.to_string(), |px| format!("{}px", px))
}
