// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::compare::{self, ViewContext as CompareViewContext};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub compare: &'a compare::State,
}

/// Renders the comparison screen filling the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = compare::view(CompareViewContext {
        i18n: ctx.i18n,
        state: ctx.compare,
    })
    .map(Message::Compare);

    Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
