// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

use iced::widget::{button as button_widget, slider as slider_widget};
use iced::Theme;
use pricing_panel::domain::pricing::{classify, RiskBand, RiskPercent};
use pricing_panel::ui::design_tokens::{palette, sizing, spacing};
use pricing_panel::ui::styles::{button, container, slider};
use pricing_panel::ui::theming::{risk_color, ThemeMode};

#[test]
fn styles_are_callable_for_both_themes() {
    for theme in [Theme::Light, Theme::Dark] {
        let _ = button::cta(&theme, button_widget::Status::Active);
        let _ = button::link(&theme, button_widget::Status::Hovered);
        let _ = container::panel(&theme);
        let _ = container::result_box(&theme);
        let _ = slider::disabled(&theme, slider_widget::Status::Active);
    }
}

#[test]
fn classification_drives_badge_color() {
    for (percent, band, color) in [
        (30, RiskBand::Recommended, palette::RISK_RECOMMENDED),
        (31, RiskBand::High, palette::RISK_HIGH),
        (60, RiskBand::High, palette::RISK_HIGH),
        (61, RiskBand::Extreme, palette::RISK_EXTREME),
    ] {
        let assessment = classify(RiskPercent::new(percent));
        assert_eq!(assessment.band, band, "band for {percent}%");
        let style = container::risk_badge(assessment.band)(&Theme::Dark);
        assert_eq!(style.border.color, color);
        assert_eq!(risk_color(band), color);
    }
}

#[test]
fn layout_tokens_fit_the_window() {
    assert!(sizing::PANEL_WIDTH + 2.0 * spacing::LG <= sizing::WINDOW_WIDTH);
    assert!(sizing::TOAST_WIDTH < sizing::PANEL_WIDTH);
}

#[test]
fn theming_switches_correctly() {
    assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
    assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
}
