// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`pricing_panel`] - Capital input, results, risk slider and checkout button
//! - [`notifications`] - Toast notifications for errors and warnings
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and risk colors

pub mod design_tokens;
pub mod notifications;
pub mod pricing_panel;
pub mod styles;
pub mod theming;
