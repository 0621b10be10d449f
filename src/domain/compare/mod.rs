// SPDX-License-Identifier: MPL-2.0
//! Comparison domain: the two-slot image pair and the reveal geometry.

mod geometry;
mod selection;

pub use geometry::{
    clamp_display_size, crop_width, revealed_pixels, DisplayLimits, DisplaySize, SliderPosition,
};
pub use selection::{SelectedImage, SelectedImages, Slot};
