// SPDX-License-Identifier: MPL-2.0
//! Update logic: turns comparison effects into asynchronous tasks.
//!
//! Every task resolves into a `compare::Message`, so results flow back through
//! the same state machine that requested them.

use super::Message;
use crate::app::config::CameraConfig;
use crate::i18n::fluent::I18n;
use crate::media::{self, permission, CaptureRequest};
use crate::ui::compare::{self, Effect};
use iced::Task;
use std::path::PathBuf;

/// Mutable references to the app state needed by handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub compare: &'a mut compare::State,
    pub camera: &'a CameraConfig,
    pub captures_dir: Option<&'a PathBuf>,
}

/// Routes a comparison message through the component and runs its effect.
pub fn handle_compare_message(
    ctx: &mut UpdateContext<'_>,
    message: compare::Message,
) -> Task<Message> {
    let effect = ctx.compare.update(message);
    run_effect(ctx, effect)
}

fn run_effect(ctx: &UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::RequestCameraPermission => {
            log::info!("Requesting camera permission");
            Task::perform(permission::request_or_open_settings(), |granted| {
                Message::Compare(compare::Message::PermissionResolved(granted))
            })
        }
        Effect::OpenLibraryPicker => Task::perform(
            media::pick_photos(
                ctx.i18n.tr("picker-title"),
                ctx.i18n.tr("picker-filter-images"),
            ),
            |response| Message::Compare(compare::Message::LibraryPicked(response)),
        ),
        Effect::LaunchCamera(slot) => {
            let Some(output_dir) = ctx.captures_dir.cloned() else {
                log::error!("No data directory available, cannot store camera captures");
                return Task::none();
            };
            let request = CaptureRequest {
                device_index: ctx.camera.device_index,
                width: ctx.camera.capture_width,
                height: ctx.camera.capture_height,
                warmup_frames: ctx.camera.warmup_frames,
                output_dir,
            };
            log::debug!("Launching camera {} for {slot:?} slot", request.device_index);
            Task::perform(media::capture_photo(request), move |result| {
                Message::Compare(compare::Message::CameraCaptured(slot, result))
            })
        }
        Effect::QueryImageSize(path) => {
            Task::perform(media::query_size(path.clone()), move |result| {
                Message::Compare(compare::Message::ImageSizeQueried(path, result))
            })
        }
    }
}
