// SPDX-License-Identifier: MPL-2.0
//! `pricing_panel` is a desktop pricing calculator built with the Iced GUI
//! framework.
//!
//! It turns a capital amount into a subscription tier and monthly fee,
//! projects a monthly result for an adjustable risk level, and hands the
//! user over to a hosted checkout page. Text is localized with Fluent.

pub mod app;
pub mod application;
pub mod checkout;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
