// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::checkout::CheckoutError;
use crate::ui::notifications;
use crate::ui::pricing_panel;
use url::Url;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(pricing_panel::Message),
    Notification(notifications::NotificationMessage),
    /// Outcome of the checkout request started by the panel.
    CheckoutFinished(Result<Url, CheckoutError>),
}

impl From<pricing_panel::Message> for Message {
    fn from(message: pricing_panel::Message) -> Self {
        Message::Panel(message)
    }
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PRICING_PANEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional checkout API base, overriding `[checkout] endpoint`.
    pub endpoint: Option<String>,
    /// Optional capital text to seed the input with.
    pub capital: Option<String>,
}
