// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Local storage key the active language tag is written under.
pub const DEFAULT_LANGUAGE_STORAGE_KEY: &str = "front-flow-language";

// ==========================================================================
// Conversion Defaults
// ==========================================================================

/// Root font size browsers use when none is set; `1rem` equals this many pixels.
pub const ROOT_FONT_SIZE_PX: u16 = 16;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LANGUAGE_STORAGE_KEY.is_empty());
    assert!(ROOT_FONT_SIZE_PX > 0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
