// SPDX-License-Identifier: MPL-2.0
//! SVG icons embedded at compile time.
//!
//! Handles are created once and cached in a `OnceLock`. Icons are drawn in the
//! current theme's text color.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone()).style(themed)
        }
    };
}

define_icon!(sun, "sun.svg", "Sun: shown while the light theme is active.");
define_icon!(moon, "moon.svg", "Moon: shown while the dark theme is active.");

fn themed(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

/// Sets both dimensions of an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_build_and_reuse_handles() {
        let _ = sized(sun(), 16.0);
        let _ = sized(sun(), 24.0);
        let _ = moon();
    }
}
