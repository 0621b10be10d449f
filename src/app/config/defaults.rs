// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Compare**: Display clamp sizes and divider thickness
//! - **Camera**: Capture device and resolution

// ==========================================================================
// Compare Defaults
// ==========================================================================

/// Width used for the base image when its natural width exceeds the viewport.
pub const DEFAULT_CLAMP_WIDTH: f32 = 300.0;

/// Height used for the base image when its natural height exceeds the viewport.
pub const DEFAULT_CLAMP_HEIGHT: f32 = 400.0;

/// Smallest accepted clamp size, in pixels.
pub const MIN_CLAMP_SIZE: f32 = 50.0;

/// Largest accepted clamp size, in pixels.
pub const MAX_CLAMP_SIZE: f32 = 4096.0;

/// Thickness of the divider line drawn at the clip edge.
/// Half of it is added to every computed crop width.
pub const DEFAULT_DIVIDER_THICKNESS: f32 = 3.0;

/// Maximum divider thickness.
pub const MAX_DIVIDER_THICKNESS: f32 = 16.0;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Default camera device index (0 = system default webcam).
pub const DEFAULT_CAMERA_INDEX: u32 = 0;

/// Requested capture width; the device may pick the closest it supports.
pub const DEFAULT_CAPTURE_WIDTH: u32 = 1280;

/// Requested capture height.
pub const DEFAULT_CAPTURE_HEIGHT: u32 = 720;

/// Frames dropped before the kept one so auto-exposure can settle.
pub const DEFAULT_WARMUP_FRAMES: u32 = 5;

/// Upper bound for warm-up frames.
pub const MAX_WARMUP_FRAMES: u32 = 120;
