// SPDX-License-Identifier: MPL-2.0
//! Comparison component encapsulating state and update logic.

use crate::app::config::CompareConfig;
use crate::domain::compare::{
    clamp_display_size, crop_width, revealed_pixels, DisplayLimits, DisplaySize, SelectedImage,
    SelectedImages, SliderPosition, Slot,
};
use crate::error::Error;
use crate::media::AcquisitionResponse;
use std::path::{Path, PathBuf};

/// Messages emitted by the comparison widgets or returned by its effects.
#[derive(Debug, Clone)]
pub enum Message {
    RequestPermission,
    SelectFromLibrary,
    Capture(Slot),
    SliderChanged(f32),
    PermissionResolved(bool),
    LibraryPicked(AcquisitionResponse),
    CameraCaptured(Slot, Result<AcquisitionResponse, Error>),
    ImageSizeQueried(PathBuf, Result<(u32, u32), Error>),
    ViewportResized(iced::Size),
}

/// Side effects requested from the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    RequestCameraPermission,
    OpenLibraryPicker,
    LaunchCamera(Slot),
    QueryImageSize(PathBuf),
}

/// Comparison screen state.
#[derive(Debug, Clone)]
pub struct State {
    images: SelectedImages,
    slider: SliderPosition,
    /// Displayed size of the base image, after viewport clamping.
    display: DisplaySize,
    crop_width: f32,
    has_permission: bool,
    viewport: DisplaySize,
    limits: DisplayLimits,
    divider_thickness: f32,
}

impl State {
    pub fn new(config: &CompareConfig, has_permission: bool, viewport: iced::Size) -> Self {
        let divider_thickness = config.divider_thickness;
        Self {
            images: SelectedImages::new(),
            slider: SliderPosition::START,
            display: DisplaySize::default(),
            crop_width: crop_width(SliderPosition::START, 0.0, divider_thickness),
            has_permission,
            viewport: DisplaySize {
                width: viewport.width,
                height: viewport.height,
            },
            limits: DisplayLimits {
                clamp_width: config.clamp_width,
                clamp_height: config.clamp_height,
            },
            divider_thickness,
        }
    }

    pub fn images(&self) -> &SelectedImages {
        &self.images
    }

    pub fn slider(&self) -> SliderPosition {
        self.slider
    }

    pub fn crop_width(&self) -> f32 {
        self.crop_width
    }

    pub fn display_size(&self) -> DisplaySize {
        self.display
    }

    pub fn divider_thickness(&self) -> f32 {
        self.divider_thickness
    }

    pub fn has_permission(&self) -> bool {
        self.has_permission
    }

    /// The base frame is shown as soon as the first slot is filled.
    pub fn shows_frame(&self) -> bool {
        self.images.base().is_some()
    }

    /// The slider needs something to reveal, so both slots must be filled.
    pub fn shows_slider(&self) -> bool {
        self.images.is_complete()
    }

    /// The overlay is drawn only once the slider uncovers at least one pixel.
    pub fn shows_overlay(&self) -> bool {
        self.images.is_complete() && revealed_pixels(self.slider, self.display.width) != 0.0
    }

    /// Applies `message` and returns the side effect the root must run.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::RequestPermission => {
                if self.has_permission {
                    Effect::None
                } else {
                    Effect::RequestCameraPermission
                }
            }
            Message::PermissionResolved(granted) => {
                log::info!("Camera permission granted: {granted}");
                self.has_permission = granted;
                Effect::None
            }
            Message::SelectFromLibrary => Effect::OpenLibraryPicker,
            Message::Capture(slot) => Effect::LaunchCamera(slot),
            Message::LibraryPicked(response) => self.handle_library_picked(&response),
            Message::CameraCaptured(slot, result) => self.handle_camera_captured(slot, result),
            Message::SliderChanged(value) => {
                self.set_slider(SliderPosition::new(value));
                Effect::None
            }
            Message::ImageSizeQueried(path, result) => {
                self.handle_size_queried(&path, result);
                Effect::None
            }
            Message::ViewportResized(size) => {
                self.viewport = DisplaySize {
                    width: size.width,
                    height: size.height,
                };
                Effect::None
            }
        }
    }

    fn handle_library_picked(&mut self, response: &AcquisitionResponse) -> Effect {
        if response.canceled {
            log::debug!("Library selection canceled");
            return Effect::None;
        }

        let picked = response.paths().map(SelectedImage::new);
        if !self.images.replace_all(picked) {
            log::debug!("Library selection returned no photo");
            return Effect::None;
        }

        log::info!("Selected {} photo(s) from the library", self.images.len());
        self.base_size_query()
    }

    fn handle_camera_captured(
        &mut self,
        slot: Slot,
        result: Result<AcquisitionResponse, Error>,
    ) -> Effect {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Camera capture into {slot:?} slot failed: {err}");
                return Effect::None;
            }
        };

        let Some(path) = response.first_path() else {
            log::debug!("Camera capture into {slot:?} slot returned no photo");
            return Effect::None;
        };

        log::info!(
            "Captured {} into {slot:?} slot, {:?} slot kept",
            path.display(),
            slot.other()
        );
        self.images.set(slot, SelectedImage::new(path));
        self.set_slider(SliderPosition::START);
        self.base_size_query()
    }

    fn handle_size_queried(&mut self, path: &Path, result: Result<(u32, u32), Error>) {
        let natural = match result {
            Ok(size) => size,
            Err(err) => {
                log::error!("Cannot read size of {}: {err}", path.display());
                return;
            }
        };

        if self.images.base().map(SelectedImage::path) != Some(path) {
            log::debug!("Ignoring size of {}, no longer the base", path.display());
            return;
        }

        self.display = clamp_display_size(natural, self.viewport, self.limits);
        self.set_slider(SliderPosition::START);
        log::debug!(
            "Base {}x{} displayed at {}x{}",
            natural.0,
            natural.1,
            self.display.width,
            self.display.height
        );
    }

    fn base_size_query(&self) -> Effect {
        match self.images.base() {
            Some(base) => Effect::QueryImageSize(base.path().to_path_buf()),
            None => Effect::None,
        }
    }

    fn set_slider(&mut self, position: SliderPosition) {
        self.slider = position;
        self.crop_width = crop_width(position, self.display.width, self.divider_thickness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn config() -> CompareConfig {
        CompareConfig {
            clamp_width: 300.0,
            clamp_height: 400.0,
            divider_thickness: 3.0,
        }
    }

    fn state() -> State {
        State::new(&config(), true, iced::Size::new(800.0, 1200.0))
    }

    fn picked(paths: &[&str]) -> Message {
        Message::LibraryPicked(AcquisitionResponse::from_paths(
            paths.iter().map(PathBuf::from),
        ))
    }

    fn captured(slot: Slot, path: &str) -> Message {
        Message::CameraCaptured(
            slot,
            Ok(AcquisitionResponse::from_paths([PathBuf::from(path)])),
        )
    }

    fn with_pair(natural: (u32, u32)) -> State {
        let mut state = state();
        state.update(picked(&["before.png", "after.png"]));
        state.update(Message::ImageSizeQueried(
            PathBuf::from("before.png"),
            Ok(natural),
        ));
        state
    }

    #[test]
    fn permission_request_only_when_missing() {
        let mut granted = state();
        assert_eq!(granted.update(Message::RequestPermission), Effect::None);

        let mut missing = State::new(&config(), false, iced::Size::new(800.0, 600.0));
        assert_eq!(
            missing.update(Message::RequestPermission),
            Effect::RequestCameraPermission
        );
        missing.update(Message::PermissionResolved(true));
        assert!(missing.has_permission());
    }

    #[test]
    fn refused_permission_keeps_asking() {
        let mut state = State::new(&config(), false, iced::Size::new(800.0, 600.0));
        assert!(!state.has_permission());

        assert_eq!(
            state.update(Message::RequestPermission),
            Effect::RequestCameraPermission
        );
        assert_eq!(state.update(Message::PermissionResolved(false)), Effect::None);
        assert!(!state.has_permission());
        assert_eq!(
            state.update(Message::RequestPermission),
            Effect::RequestCameraPermission
        );
    }

    #[test]
    fn library_selection_fills_slots_in_order_and_queries_base() {
        let mut state = state();
        let effect = state.update(picked(&["a.png", "b.png"]));

        assert_eq!(effect, Effect::QueryImageSize(PathBuf::from("a.png")));
        assert_eq!(
            state.images().get(Slot::First).map(SelectedImage::path),
            Some(Path::new("a.png"))
        );
        assert_eq!(
            state.images().get(Slot::Second).map(SelectedImage::path),
            Some(Path::new("b.png"))
        );
    }

    #[test]
    fn canceled_or_empty_selection_keeps_state() {
        let mut state = with_pair((100, 100));

        assert_eq!(
            state.update(Message::LibraryPicked(AcquisitionResponse::canceled())),
            Effect::None
        );
        assert_eq!(state.update(picked(&[])), Effect::None);
        assert!(state.images().is_complete());
    }

    #[test]
    fn capture_into_first_keeps_second() {
        let mut state = with_pair((100, 100));
        let effect = state.update(captured(Slot::First, "new.png"));

        assert_eq!(effect, Effect::QueryImageSize(PathBuf::from("new.png")));
        assert_eq!(
            state.images().get(Slot::Second).map(SelectedImage::path),
            Some(Path::new("after.png"))
        );
    }

    #[test]
    fn capture_into_second_keeps_first() {
        let mut state = with_pair((100, 100));
        state.update(captured(Slot::Second, "new.png"));

        assert_eq!(
            state.images().get(Slot::First).map(SelectedImage::path),
            Some(Path::new("before.png"))
        );
        assert_eq!(
            state.images().get(Slot::Second).map(SelectedImage::path),
            Some(Path::new("new.png"))
        );
    }

    #[test]
    fn capture_resets_slider() {
        let mut state = with_pair((200, 100));
        state.update(Message::SliderChanged(0.8));
        assert!(state.crop_width() > 100.0);

        state.update(captured(Slot::Second, "new.png"));

        assert_eq!(state.slider(), SliderPosition::START);
        assert_abs_diff_eq!(state.crop_width(), 1.5);
    }

    #[test]
    fn failed_or_empty_capture_is_a_no_op() {
        let mut state = with_pair((100, 100));
        state.update(Message::SliderChanged(0.5));

        let failed = Message::CameraCaptured(
            Slot::First,
            Err(Error::Camera(crate::error::CameraError::Init(
                "no device".into(),
            ))),
        );
        assert_eq!(state.update(failed), Effect::None);
        let empty = Message::CameraCaptured(Slot::First, Ok(AcquisitionResponse::default()));
        assert_eq!(state.update(empty), Effect::None);

        assert_eq!(state.slider(), SliderPosition::new(0.5));
        assert_eq!(
            state.images().base().map(SelectedImage::path),
            Some(Path::new("before.png"))
        );
    }

    #[test]
    fn capture_into_second_without_base_skips_size_query() {
        let mut state = state();
        let effect = state.update(captured(Slot::Second, "after.png"));

        assert_eq!(effect, Effect::None);
        assert!(!state.shows_frame());
        assert!(!state.shows_slider());
        assert!(!state.shows_overlay());
    }

    #[test]
    fn oversized_base_is_clamped_with_initial_crop() {
        let state = with_pair((1000, 2000));

        assert_eq!(
            state.display_size(),
            DisplaySize {
                width: 300.0,
                height: 400.0
            }
        );
        assert_abs_diff_eq!(state.crop_width(), 1.5);
    }

    #[test]
    fn slider_at_half_reveals_half_plus_offset() {
        let mut state = with_pair((1000, 2000));
        state.update(Message::SliderChanged(0.5));
        assert_abs_diff_eq!(state.crop_width(), 151.5);
    }

    #[test]
    fn overlay_needs_two_images_and_a_revealed_pixel() {
        let mut state = with_pair((300, 300));
        assert!(state.shows_slider());
        assert!(!state.shows_overlay());

        state.update(Message::SliderChanged(0.25));
        assert!(state.shows_overlay());
    }

    #[test]
    fn single_image_never_shows_overlay() {
        let mut state = state();
        state.update(picked(&["only.png"]));
        state.update(Message::ImageSizeQueried(
            PathBuf::from("only.png"),
            Ok((300, 300)),
        ));
        state.update(Message::SliderChanged(0.7));

        assert!(state.shows_frame());
        assert!(!state.shows_slider());
        assert!(!state.shows_overlay());
    }

    #[test]
    fn failed_size_query_keeps_geometry() {
        let mut state = with_pair((640, 480));
        state.update(Message::ImageSizeQueried(
            PathBuf::from("before.png"),
            Err(Error::Image("truncated".into())),
        ));

        assert_eq!(
            state.display_size(),
            DisplaySize {
                width: 640.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn stale_size_result_is_ignored() {
        let mut state = with_pair((640, 480));
        state.update(Message::ImageSizeQueried(
            PathBuf::from("someone-else.png"),
            Ok((10, 10)),
        ));
        assert_eq!(state.display_size().width, 640.0);
    }

    #[test]
    fn viewport_resize_changes_later_clamps() {
        let mut state = state();
        state.update(Message::ViewportResized(iced::Size::new(500.0, 500.0)));
        state.update(picked(&["a.png", "b.png"]));
        state.update(Message::ImageSizeQueried(PathBuf::from("a.png"), Ok((640, 480))));

        assert_eq!(
            state.display_size(),
            DisplaySize {
                width: 300.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn slider_values_out_of_range_are_clamped() {
        let mut state = with_pair((300, 300));
        state.update(Message::SliderChanged(7.0));
        assert_eq!(state.slider().value(), 1.0);
        assert_abs_diff_eq!(state.crop_width(), 300.0);
    }
}
