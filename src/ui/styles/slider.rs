// SPDX-License-Identifier: MPL-2.0
//! Risk slider styles.

use crate::domain::pricing::RiskBand;
use crate::ui::design_tokens::{opacity, palette, sizing};
use crate::ui::theming::risk_color;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

fn rail_border() -> Border {
    Border {
        color: Color::TRANSPARENT,
        width: 0.0,
        radius: (sizing::SLIDER_RAIL / 2.0).into(),
    }
}

/// Active slider: the filled part of the rail takes the band color.
pub fn risk(band: RiskBand) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |theme: &Theme, status: slider::Status| {
        let accent = risk_color(band);
        let empty = if matches!(theme, Theme::Light) {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        };
        let handle_border = match status {
            slider::Status::Hovered | slider::Status::Dragged => palette::WHITE,
            slider::Status::Active => accent,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (Background::Color(accent), Background::Color(empty)),
                width: sizing::SLIDER_RAIL,
                border: rail_border(),
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle {
                    radius: sizing::SLIDER_HANDLE,
                },
                background: Background::Color(accent),
                border_width: 2.0,
                border_color: handle_border,
            },
        }
    }
}

/// Slider locked at the recommended level until the risk is acknowledged.
pub fn disabled(theme: &Theme, _status: slider::Status) -> slider::Style {
    let is_light = matches!(theme, Theme::Light);
    let (rail_bg, handle_bg) = if is_light {
        (palette::GRAY_100, palette::GRAY_200)
    } else {
        (palette::GRAY_700, palette::GRAY_400)
    };
    let rail_bg = Color {
        a: opacity::OVERLAY_STRONG,
        ..rail_bg
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (Background::Color(rail_bg), Background::Color(rail_bg)),
            width: sizing::SLIDER_RAIL,
            border: rail_border(),
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: sizing::SLIDER_HANDLE,
            },
            background: Background::Color(handle_bg),
            border_width: 1.0,
            border_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_rail_uses_band_color() {
        let style = risk(RiskBand::Extreme)(&Theme::Dark, slider::Status::Active);
        assert_eq!(style.rail.backgrounds.0, Background::Color(palette::RISK_EXTREME));
    }

    #[test]
    fn disabled_rail_is_uniform() {
        let style = disabled(&Theme::Light, slider::Status::Active);
        assert_eq!(style.rail.backgrounds.0, style.rail.backgrounds.1);
    }
}
