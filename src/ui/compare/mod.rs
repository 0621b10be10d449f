// SPDX-License-Identifier: MPL-2.0
//! Comparison screen: action buttons, the before/after frame and the reveal
//! slider.
//!
//! [`component`] owns the state machine and never performs I/O itself; it
//! answers each [`Message`] with an [`Effect`] that the application root turns
//! into a task. [`view`] renders the state.

pub mod component;
mod view;

pub use component::{Effect, Message, State};
pub use view::{view, ViewContext};
