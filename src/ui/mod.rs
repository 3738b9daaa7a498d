// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages up"
//! pattern.
//!
//! # Screens
//!
//! - [`conversion`] - Pixel-to-rem reference tables with a utility selector
//!
//! # Shared Infrastructure
//!
//! - [`context`] - Provider handles passed down the view tree
//! - [`navbar`] - Title bar with language picker and theme toggle
//! - [`theme_toggle`] - Light/dark toggle button
//! - [`theming`] - Light/Dark/System theme mode and its provider
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons

pub mod components;
pub mod context;
pub mod conversion;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod styles;
pub mod theme_toggle;
pub mod theming;
