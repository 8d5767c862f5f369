// SPDX-License-Identifier: MPL-2.0
//! Capital pricing panel with the risk slider and the checkout button.
//!
//! This module follows a "state down, messages up" pattern: the app owns the
//! [`State`], forwards [`Message`]s to [`State::update`] and acts on the
//! returned [`Event`]. The checkout request itself is performed by the app,
//! which then reports back through [`State::checkout_succeeded`] or
//! [`State::checkout_failed`].

mod messages;
mod presentation;
mod state;
mod view;

pub use messages::{Event, Message};
pub use presentation::{Details, Presentation, RiskDisplay, WarningDisplay};
pub use state::{CtaState, LoadingStep, State};
pub use view::{view, ViewContext};
