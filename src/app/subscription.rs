// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window resizes are routed: the comparison screen needs the current
//! viewport to clamp the displayed image size.

use super::Message;
use crate::ui::compare;
use iced::{event, window, Subscription};

/// Forwards window resize events to the comparison screen.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::Compare(compare::Message::ViewportResized(size)))
        }
        _ => None,
    })
}
