// SPDX-License-Identifier: MPL-2.0
//! Pricing panel layout.

use super::messages::Message;
use super::presentation::{Details, Presentation, RiskDisplay};
use super::state::State;
use crate::domain::pricing::risk_bounds;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{risk_color, ColorScheme};
use iced::widget::{button, checkbox, container, slider, text, text_input, Column, Row};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the whole panel from its state.
pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let presentation = Presentation::from_state(state, i18n);

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(text(i18n.tr("title-line1")).size(typography::DISPLAY))
        .push(
            text(i18n.tr("title-line2"))
                .size(typography::DISPLAY)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).brand_primary),
                }),
        )
        .push(text(i18n.tr("subtitle")).size(typography::BODY).style(secondary_text));

    let placeholder = i18n.tr("capital-placeholder");
    let capital_input = text_input(placeholder.as_str(), state.capital_text())
        .on_input(Message::CapitalChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let mut capital_section = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("capital-label")).size(typography::BODY))
        .push(capital_input);
    if let Some(message) = presentation.amount_message.clone() {
        capital_section = capital_section.push(text(message).size(typography::BODY_SM).style(
            |_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            },
        ));
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(capital_section);

    if let Some(details) = presentation.details.clone() {
        content = content
            .push(results(details.clone(), i18n))
            .push(risk_section(state, details.risk, i18n))
            .push(
                text(i18n.tr("disclaimer"))
                    .size(typography::CAPTION)
                    .style(secondary_text),
            )
            .push(cta_section(state, &presentation, i18n));
    }

    container(content)
        .padding(spacing::XL)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

fn labelled_value<'a>(label: String, value: String, size: f32) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            text(label)
                .size(typography::BODY)
                .style(secondary_text)
                .width(Length::Fill),
        )
        .push(text(value).size(size))
        .into()
}

fn results<'a>(details: Details, i18n: &I18n) -> Element<'a, Message> {
    let estimate = text(details.estimated_result)
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::SUCCESS_500),
        });

    let column = Column::new()
        .spacing(spacing::SM)
        .push(labelled_value(
            i18n.tr("capital-range"),
            details.capital_range,
            typography::BODY_LG,
        ))
        .push(labelled_value(
            i18n.tr("monthly-fee"),
            details.monthly_fee,
            typography::TITLE_MD,
        ))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    text(i18n.tr("estimated-result"))
                        .size(typography::BODY)
                        .style(secondary_text)
                        .width(Length::Fill),
                )
                .push(estimate),
        )
        .push(
            text(details.exposure)
                .size(typography::CAPTION)
                .style(secondary_text),
        );

    container(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::result_box)
        .into()
}

fn risk_section<'a>(state: &State, risk: RiskDisplay, i18n: &I18n) -> Element<'a, Message> {
    let toggle_label = if state.risk_panel_open() {
        format!("{} \u{25B4}", i18n.tr("adjust-risk"))
    } else {
        format!("{} \u{25BE}", i18n.tr("adjust-risk"))
    };
    let toggle = button(text(toggle_label).size(typography::BODY))
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::ToggleRiskPanel);

    let mut section = Column::new().spacing(spacing::SM).push(toggle);
    if !state.risk_panel_open() {
        return section.into();
    }

    let band = risk.band;
    let accent = risk_color(band);
    let badge = container(text(risk.badge).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::risk_badge(band));

    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            text(i18n.tr("risk-level"))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            text(risk.percent)
                .size(typography::TITLE_MD)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                }),
        )
        .push(badge);

    let risk_slider = slider(
        risk_bounds::MIN..=risk_bounds::MAX,
        state.risk().value(),
        Message::RiskChanged,
    )
    .step(1u8)
    .width(Length::Fill);
    let risk_slider = if state.risk_acknowledged() {
        risk_slider.style(styles::slider::risk(band))
    } else {
        risk_slider.style(styles::slider::disabled)
    };

    let acknowledge = checkbox(state.risk_acknowledged())
        .label(i18n.tr("acknowledge-text"))
        .on_toggle(Message::RiskAcknowledged)
        .text_size(typography::BODY_SM);

    section = section.push(heading).push(risk_slider).push(acknowledge);

    if let Some(warning) = risk.warning {
        section = section.push(
            container(text(warning.text).size(typography::BODY_SM))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::risk_warning(band, warning.danger)),
        );
    }

    section.into()
}

fn cta_section<'a>(
    state: &State,
    presentation: &Presentation,
    i18n: &I18n,
) -> Element<'a, Message> {
    let terms_label = format!(
        "{} {}, {} {} {}",
        i18n.tr("terms-text"),
        i18n.tr("terms-tou"),
        i18n.tr("terms-tos"),
        i18n.tr("terms-and"),
        i18n.tr("terms-privacy"),
    );
    let terms = checkbox(state.terms_accepted())
        .label(terms_label)
        .on_toggle(Message::TermsToggled)
        .text_size(typography::CAPTION);

    let cta = button(
        container(text(presentation.cta_label.clone()).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::SM)
    .style(styles::button::cta)
    .on_press_maybe(presentation.cta_enabled.then_some(Message::CtaPressed));

    let mut section = Column::new().spacing(spacing::MD).push(terms).push(cta);
    if let Some(notice) = presentation.redirect_notice.clone() {
        section = section.push(
            text(notice)
                .size(typography::CAPTION)
                .style(secondary_text),
        );
    }
    section.into()
}
