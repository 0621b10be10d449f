// SPDX-License-Identifier: MPL-2.0
//! Rendering of the comparison screen.

use super::component::{Message, State};
use crate::domain::compare::Slot;
use crate::i18n::fluent::I18n;
use crate::ui::components::custom_button;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::cropped_image;
use iced::alignment::Horizontal;
use iced::widget::{
    container, image, scrollable, slider, text, Column, Container, Row, Space, Stack,
};
use iced::{ContentFit, Element, Length, Padding};

/// Step of the reveal slider, fine enough for one pixel on wide photos.
const SLIDER_STEP: f32 = 0.001;

/// Contextual data needed to render the comparison screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the comparison screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .padding(spacing::MD);

    let buttons = actions(ctx.state);
    if !ctx.state.has_permission() {
        content = content
            .push(action_buttons(ctx.i18n, buttons))
            .push(hint(ctx.i18n.tr("permission-hint")));
        return scrollable(content).into();
    }

    content = content
        .push(action_buttons(ctx.i18n, buttons))
        .push(slot_labels(&ctx));

    if ctx.state.shows_frame() {
        content = content.push(comparison_frame(ctx.state));
    } else if ctx.state.images().is_empty() {
        content = content.push(hint(ctx.i18n.tr("compare-empty-hint")));
    } else {
        content = content.push(hint(ctx.i18n.tr("compare-missing-base")));
    }

    if ctx.state.shows_slider() {
        content = content.push(
            slider(0.0..=1.0, ctx.state.slider().value(), Message::SliderChanged)
                .step(SLIDER_STEP)
                .width(Length::Fill)
                .style(styles::slider::reveal),
        );
    }

    scrollable(content).into()
}

/// Buttons offered for the current state, as label key and message.
/// Without camera permission only the permission request is available.
fn actions(state: &State) -> Vec<(&'static str, Message)> {
    if !state.has_permission() {
        return vec![("button-give-permissions", Message::RequestPermission)];
    }
    vec![
        ("button-select-photos", Message::SelectFromLibrary),
        ("button-take-first-photo", Message::Capture(Slot::First)),
        ("button-take-second-photo", Message::Capture(Slot::Second)),
    ]
}

fn action_buttons<'a>(
    i18n: &I18n,
    buttons: Vec<(&'static str, Message)>,
) -> Element<'a, Message> {
    buttons
        .into_iter()
        .fold(
            Column::new().spacing(spacing::XS).align_x(Horizontal::Center),
            |column, (key, message)| column.push(custom_button(i18n.tr(key), message)),
        )
        .into()
}

fn slot_labels<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = |slot: Slot, key: &str| {
        let status = match ctx.state.images().get(slot) {
            Some(image) => {
                let name = image.display_name();
                ctx.i18n
                    .tr_with_args("slot-file-name", &[("name", name.as_str())])
            }
            None => ctx.i18n.tr("slot-empty"),
        };
        text(format!("{}: {}", ctx.i18n.tr(key), status)).size(typography::CAPTION)
    };

    Row::new()
        .spacing(spacing::LG)
        .push(label(Slot::First, "slot-first-label"))
        .push(label(Slot::Second, "slot-second-label"))
        .into()
}

/// Base image with the clipped overlay and the divider stacked on top.
fn comparison_frame<'a>(state: &'a State) -> Element<'a, Message> {
    let size = state.display_size();
    let mut layers = Stack::new();

    if let Some(base) = state.images().base() {
        layers = layers.push(
            image(image::Handle::from_path(base.path()))
                .width(Length::Fixed(size.width))
                .height(Length::Fixed(size.height))
                .content_fit(ContentFit::Cover),
        );
    }

    if let (true, Some(overlay)) = (state.shows_overlay(), state.images().overlay()) {
        let crop = state.crop_width();
        layers = layers.push(cropped_image(
            overlay.path(),
            crop,
            size.height,
            size.width,
            size.height,
        ));

        let thickness = state.divider_thickness();
        let divider = Container::new(Space::new())
            .width(Length::Fixed(thickness))
            .height(Length::Fixed(size.height))
            .style(styles::container::divider);
        layers = layers.push(container(divider).padding(Padding {
            left: (crop - thickness / 2.0).max(0.0),
            ..Padding::ZERO
        }));
    }

    container(layers)
        .padding(border::WIDTH_SM)
        .style(styles::container::compare_frame)
        .into()
}

fn hint<'a>(message: String) -> Element<'a, Message> {
    text(message).size(typography::BODY).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::CompareConfig;

    fn state(has_permission: bool) -> State {
        let config = CompareConfig {
            clamp_width: 300.0,
            clamp_height: 400.0,
            divider_thickness: 3.0,
        };
        State::new(&config, has_permission, iced::Size::new(800.0, 1200.0))
    }

    #[test]
    fn without_permission_only_request_button_is_offered() {
        let buttons = actions(&state(false));

        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].0, "button-give-permissions");
        assert!(matches!(buttons[0].1, Message::RequestPermission));
    }

    #[test]
    fn with_permission_acquisition_buttons_are_offered() {
        let buttons = actions(&state(true));
        let keys: Vec<_> = buttons.iter().map(|(key, _)| *key).collect();

        assert_eq!(
            keys,
            [
                "button-select-photos",
                "button-take-first-photo",
                "button-take-second-photo"
            ]
        );
        assert!(matches!(buttons[0].1, Message::SelectFromLibrary));
        assert!(matches!(buttons[1].1, Message::Capture(Slot::First)));
        assert!(matches!(buttons[2].1, Message::Capture(Slot::Second)));
        assert!(buttons
            .iter()
            .all(|(_, message)| !matches!(message, Message::RequestPermission)));
    }
}
