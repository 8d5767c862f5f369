// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::pricing::RiskBand;
use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::{risk_color, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface holding the whole pricing panel.
///
/// Derived from the iced theme background with a slight opacity so it
/// reads on both light and dark windows.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Box around the capital bracket, fee and estimate.
pub fn result_box(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill showing the current risk band.
pub fn risk_badge(band: RiskBand) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = risk_color(band);
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: Some(accent),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Outlined box for a risk warning; danger warnings use the extreme color.
pub fn risk_warning(band: RiskBand, danger: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = if danger {
            risk_color(RiskBand::Extreme)
        } else {
            risk_color(band)
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}
