// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::pricing_panel::{self, ViewContext as PanelViewContext};
use iced::widget::{scrollable, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub panel: &'a pricing_panel::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the centered pricing panel with toasts stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = pricing_panel::view(ctx.panel, &PanelViewContext { i18n: ctx.i18n })
        .map(Message::Panel);

    let centered = Container::new(panel)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG);

    let base = Container::new(scrollable(centered))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);
    if ctx.notifications.has_notifications() {
        layers = layers
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
