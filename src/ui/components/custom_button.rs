// SPDX-License-Identifier: MPL-2.0
//! Labeled action button used for every acquisition action.

use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Button};
use iced::Length;

/// A 150×50 brand button that emits `on_press` once per activation.
pub fn custom_button<'a, Message: Clone + 'a>(
    title: impl Into<String>,
    on_press: Message,
) -> Button<'a, Message> {
    let label = text(title.into())
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    button(label)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::action)
        .on_press(on_press)
}
