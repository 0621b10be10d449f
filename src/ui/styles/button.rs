// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Brand-green action button with large rounded corners.
pub fn action(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::BRAND_400, shadow::SM),
        button::Status::Pressed => (palette::BRAND_600, shadow::NONE),
        button::Status::Active => (palette::BRAND_500, shadow::SM),
        button::Status::Disabled => (
            Color {
                a: opacity::DISABLED,
                ..palette::BRAND_500
            },
            shadow::NONE,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::LG.into(),
        },
        shadow,
        snap: true,
    }
}
