// SPDX-License-Identifier: MPL-2.0
//! Reveal geometry: slider position, crop width and displayed image size.

// =============================================================================
// SliderPosition
// =============================================================================

/// Normalized reveal slider position, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderPosition(f32);

impl SliderPosition {
    pub const START: Self = Self(0.0);

    /// Creates a position, clamping into range. NaN maps to the start.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self::START
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// Crop width
// =============================================================================

/// Whole pixels of the overlay uncovered at `position` for an image
/// `image_width` pixels wide.
#[must_use]
pub fn revealed_pixels(position: SliderPosition, image_width: f32) -> f32 {
    ((position.value() * 100.0 * image_width) / 100.0).floor()
}

/// Width of the overlay clip frame: the revealed pixels plus half the divider
/// thickness, kept within `0.0..=image_width`.
#[must_use]
pub fn crop_width(position: SliderPosition, image_width: f32, divider_thickness: f32) -> f32 {
    let image_width = image_width.max(0.0);
    (revealed_pixels(position, image_width) + divider_thickness / 2.0).clamp(0.0, image_width)
}

// =============================================================================
// Display size
// =============================================================================

/// Sizes substituted for an image dimension that does not fit the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayLimits {
    pub clamp_width: f32,
    pub clamp_height: f32,
}

/// Width and height an image is drawn at, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

/// Picks the displayed size of an image of natural size `natural` inside a
/// viewport. Each axis is handled on its own: an axis larger than the
/// viewport is replaced by the configured clamp value, otherwise the natural
/// value is kept. The aspect ratio is not preserved.
#[must_use]
pub fn clamp_display_size(
    natural: (u32, u32),
    viewport: DisplaySize,
    limits: DisplayLimits,
) -> DisplaySize {
    let (width, height) = (natural.0 as f32, natural.1 as f32);
    DisplaySize {
        width: if width > viewport.width {
            limits.clamp_width
        } else {
            width
        },
        height: if height > viewport.height {
            limits.clamp_height
        } else {
            height
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const LIMITS: DisplayLimits = DisplayLimits {
        clamp_width: 300.0,
        clamp_height: 400.0,
    };

    #[test]
    fn slider_position_is_clamped() {
        assert_eq!(SliderPosition::new(-0.5).value(), 0.0);
        assert_eq!(SliderPosition::new(1.5).value(), 1.0);
        assert_eq!(SliderPosition::new(f32::NAN), SliderPosition::START);
    }

    #[test]
    fn crop_width_at_half_of_300_is_151_5() {
        let width = crop_width(SliderPosition::new(0.5), 300.0, 3.0);
        assert_abs_diff_eq!(width, 151.5);
    }

    #[test]
    fn crop_width_at_start_is_half_divider() {
        let width = crop_width(SliderPosition::START, 300.0, 3.0);
        assert_abs_diff_eq!(width, 1.5);
    }

    #[test]
    fn crop_width_never_exceeds_image_width() {
        assert_abs_diff_eq!(crop_width(SliderPosition::new(1.0), 300.0, 3.0), 300.0);
        assert_abs_diff_eq!(crop_width(SliderPosition::new(0.5), 0.0, 3.0), 0.0);
    }

    #[test]
    fn crop_width_is_monotonic_and_tracks_position() {
        let image_width = 317.0;
        let mut previous = 0.0;
        for step in 0..=1000 {
            let position = SliderPosition::new(step as f32 / 1000.0);
            let width = crop_width(position, image_width, 3.0);
            assert!(width >= previous, "step {step}: {width} < {previous}");
            assert!((width - position.value() * image_width).abs() <= 1.5 + 1.0);
            previous = width;
        }
    }

    #[test]
    fn revealed_pixels_floors() {
        assert_abs_diff_eq!(revealed_pixels(SliderPosition::new(0.333), 100.0), 33.0);
        assert_abs_diff_eq!(revealed_pixels(SliderPosition::new(0.001), 100.0), 0.0);
    }

    #[test]
    fn oversized_image_is_clamped_on_both_axes() {
        let viewport = DisplaySize {
            width: 800.0,
            height: 1200.0,
        };
        let size = clamp_display_size((1000, 2000), viewport, LIMITS);
        assert_eq!(
            size,
            DisplaySize {
                width: 300.0,
                height: 400.0
            }
        );
    }

    #[test]
    fn fitting_image_keeps_natural_size() {
        let viewport = DisplaySize {
            width: 800.0,
            height: 600.0,
        };
        let size = clamp_display_size((640, 480), viewport, LIMITS);
        assert_eq!(
            size,
            DisplaySize {
                width: 640.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn axes_are_clamped_independently() {
        let viewport = DisplaySize {
            width: 800.0,
            height: 600.0,
        };
        let size = clamp_display_size((900, 500), viewport, LIMITS);
        assert_eq!(
            size,
            DisplaySize {
                width: 300.0,
                height: 500.0
            }
        );
    }
}
