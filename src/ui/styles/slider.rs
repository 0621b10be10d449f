// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{palette, radius, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Reveal slider: gray on the revealed side, accent on the rest, brand handle.
pub fn reveal(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => sizing::SLIDER_HANDLE_RADIUS + 2.0,
        slider::Status::Active => sizing::SLIDER_HANDLE_RADIUS,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::GRAY_200),
                Background::Color(palette::ACCENT_500),
            ),
            width: sizing::SLIDER_RAIL,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(palette::BRAND_500),
            border_width: 1.0,
            border_color: palette::WHITE,
        },
    }
}
