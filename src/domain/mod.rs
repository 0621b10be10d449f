// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core comparison logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so it can be
//! tested without a window, a camera or a file dialog.
//!
//! # Modules
//!
//! - [`compare`]: Image pair ([`SelectedImages`](compare::SelectedImages),
//!   [`Slot`](compare::Slot)) and reveal geometry
//!   ([`SliderPosition`](compare::SliderPosition), [`crop_width`](compare::crop_width),
//!   [`clamp_display_size`](compare::clamp_display_size))

pub mod compare;
