// SPDX-License-Identifier: MPL-2.0
//! Design tokens: palette, opacity, spacing, sizing, typography and radii.
//!
//! Spacing follows an 8px grid; keep ratios intact when changing values
//! (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Rows that do not apply to the current selection.
    pub const DIMMED: f32 = 0.45;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 20.0;

    pub const SELECT_WIDTH: f32 = 180.0;
    pub const TABLE_COLUMN_WIDTH: f32 = 96.0;
    pub const LANGUAGE_PICKER_WIDTH: f32 = 200.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page title (the "h2" of the conversion page)
    pub const TITLE_LG: f32 = 24.0;

    /// App name in the navigation bar
    pub const TITLE_MD: f32 = 20.0;

    pub const BODY: f32 = 14.0;

    /// Table headers
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

/// Applies the dimmed opacity to a color.
#[must_use]
pub fn dimmed(color: Color) -> Color {
    Color {
        a: opacity::DIMMED,
        ..color
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::DIMMED > 0.0 && opacity::DIMMED < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::ICON_MD > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn dimmed_keeps_rgb() {
        let color = dimmed(palette::PRIMARY_500);
        assert_eq!(color.r, palette::PRIMARY_500.r);
        assert_eq!(color.a, opacity::DIMMED);
    }
}
