// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.
//!
//! - [`cropped_image`] - Clipping frame used for the overlay image

pub mod cropped_image;

pub use cropped_image::{cropped_image, CroppedImage};
