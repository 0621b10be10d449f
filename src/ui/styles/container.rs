// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Rounded, thin-bordered frame around the comparison images.
pub fn compare_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Solid line marking the reveal edge.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::DIVIDER)),
        ..Default::default()
    }
}
