// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! The panel decides *whether* a checkout starts; the handlers here perform
//! the request and feed the outcome back into the panel and the toasts.

use super::Message;
use crate::application::port::Navigator;
use crate::checkout::{CheckoutClient, CheckoutError, CheckoutRequest};
use crate::error::Error;
use crate::ui::notifications::{self, Notification};
use crate::ui::pricing_panel::{self, Event as PanelEvent};
use iced::Task;
use url::Url;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub panel: &'a mut pricing_panel::State,
    pub checkout: &'a Result<CheckoutClient, Error>,
    pub navigator: &'a dyn Navigator,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: pricing_panel::Message,
) -> Task<Message> {
    match ctx.panel.update(message) {
        PanelEvent::None => Task::none(),
        PanelEvent::CheckoutRequested(request) => start_checkout(ctx, request),
    }
}

fn start_checkout(ctx: &mut UpdateContext<'_>, request: CheckoutRequest) -> Task<Message> {
    ctx.notifications.clear_errors();

    match ctx.checkout {
        Ok(client) => {
            let client = client.clone();
            Task::perform(
                async move { client.create_session(&request).await },
                Message::CheckoutFinished,
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "checkout client unavailable");
            fail_checkout(ctx, &err.to_string());
            Task::none()
        }
    }
}

pub fn handle_checkout_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<Url, CheckoutError>,
) -> Task<Message> {
    match result {
        Ok(url) => {
            ctx.panel.checkout_succeeded(url.clone());
            if let Err(err) = ctx.navigator.navigate(&url) {
                tracing::warn!(error = %err, %url, "could not open the payment page");
                ctx.notifications.push(
                    Notification::error("notification-browser-error").with_arg("url", url.as_str()),
                );
            }
        }
        Err(err) => fail_checkout(ctx, &err.to_string()),
    }
    Task::none()
}

fn fail_checkout(ctx: &mut UpdateContext<'_>, message: &str) {
    ctx.panel.checkout_failed();
    ctx.notifications
        .push(Notification::error("error-toast").with_arg("message", message));
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}
