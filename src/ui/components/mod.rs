// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.

pub mod error_display;
