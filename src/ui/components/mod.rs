// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`custom_button`] - Fixed-size brand action button

pub mod custom_button;

pub use custom_button::custom_button;
