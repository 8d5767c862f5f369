// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`navigator`]: Handing a URL over to the user's browser
//!
//! # Design Notes
//!
//! - No Iced types cross a port
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod navigator;

pub use navigator::{NavigationError, Navigator};
