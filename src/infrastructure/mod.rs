// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`browser`]: Platform URL opener (implements [`Navigator`])
//!
//! [`Navigator`]: crate::application::port::Navigator

pub mod browser;

pub use browser::SystemBrowser;
