// SPDX-License-Identifier: MPL-2.0
//! `front_flow` is a desktop reference for converting pixel spacing values to
//! rem, built with the Iced GUI framework.
//!
//! It shows the Tailwind spacing scale as two side-by-side tables, lets the
//! user pick a utility family (gap, padding or margin side), and demonstrates
//! internationalization with Fluent plus a persisted light/dark theme toggle.

#![doc(html_root_url = "https://docs.rs/front_flow/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
