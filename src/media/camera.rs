// SPDX-License-Identifier: MPL-2.0
//! Still capture from the system camera.
//!
//! The device is opened for a single shot: a few warm-up frames are dropped so
//! exposure and white balance can settle, then one frame is decoded to RGB and
//! written as PNG into the captures directory.

use super::AcquisitionResponse;
use crate::error::{CameraError, Error, Result};
use std::path::{Path, PathBuf};

/// Parameters of one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub device_index: u32,
    pub width: u32,
    pub height: u32,
    pub warmup_frames: u32,
    pub output_dir: PathBuf,
}

/// Takes one photo without blocking the UI thread.
pub async fn capture_photo(request: CaptureRequest) -> Result<AcquisitionResponse> {
    tokio::task::spawn_blocking(move || backend::capture_blocking(&request))
        .await
        .map_err(|e| Error::Camera(CameraError::Frame(e.to_string())))?
}

#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
mod backend {
    use super::{AcquisitionResponse, CaptureRequest, CameraError, Result};
    use nokhwa::{
        pixel_format::RgbFormat,
        utils::{
            CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType,
            Resolution,
        },
        Camera,
    };

    /// Frame rate asked from the device; the backend picks the closest match.
    const TARGET_FPS: u32 = 30;

    pub(super) fn capture_blocking(request: &CaptureRequest) -> Result<AcquisitionResponse> {
        let format = CameraFormat::new(
            Resolution::new(request.width, request.height),
            FrameFormat::YUYV,
            TARGET_FPS,
        );
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(format));

        let mut camera = Camera::new(CameraIndex::Index(request.device_index), requested)
            .map_err(|e| CameraError::Init(format!("Create camera: {e}")))?;
        camera
            .open_stream()
            .map_err(|e| CameraError::Init(format!("Open stream: {e}")))?;

        let outcome = grab_and_save(&mut camera, request);

        if let Err(err) = camera.stop_stream() {
            log::warn!("Failed to stop camera stream: {err}");
        }
        outcome
    }

    fn grab_and_save(camera: &mut Camera, request: &CaptureRequest) -> Result<AcquisitionResponse> {
        for _ in 0..request.warmup_frames {
            camera
                .frame()
                .map_err(|e| CameraError::Frame(format!("Warm-up frame: {e}")))?;
        }

        let frame = camera
            .frame()
            .map_err(|e| CameraError::Frame(format!("Fetch frame: {e}")))?;
        let rgb = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::Frame(format!("Decode RGB: {e}")))?;

        let (width, height) = rgb.dimensions();
        let path = super::write_png(&request.output_dir, width, height, rgb.into_raw())?;
        log::info!("Captured {}x{} photo to {}", width, height, path.display());

        Ok(AcquisitionResponse::from_paths([path]))
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
mod backend {
    use super::{AcquisitionResponse, CaptureRequest, CameraError, Result};

    pub(super) fn capture_blocking(request: &CaptureRequest) -> Result<AcquisitionResponse> {
        Err(CameraError::Init(format!(
            "No camera backend on this platform (device {})",
            request.device_index
        ))
        .into())
    }
}

/// Writes packed RGB8 pixels as a timestamped PNG in `dir` and returns its path.
pub fn write_png(dir: &Path, width: u32, height: u32, pixels: Vec<u8>) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| CameraError::Save(e.to_string()))?;

    let buffer = image_rs::RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
        CameraError::Save(format!("Frame buffer does not match {width}x{height}"))
    })?;

    let path = dir.join(capture_file_name(chrono::Local::now()));
    buffer
        .save_with_format(&path, image_rs::ImageFormat::Png)
        .map_err(|e| CameraError::Save(e.to_string()))?;
    Ok(path)
}

fn capture_file_name<Tz>(now: chrono::DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("capture-{}.png", now.format("%Y%m%d-%H%M%S-%3f"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn capture_file_name_contains_timestamp() {
        let now = chrono::Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("valid date");
        assert_eq!(capture_file_name(now), "capture-20240309-140507-000.png");
    }

    #[test]
    fn write_png_creates_directory_and_file() {
        let dir = tempdir().expect("temp dir");
        let output = dir.path().join("captures");
        let pixels = vec![128u8; 4 * 3 * 3];

        let path = write_png(&output, 4, 3, pixels).expect("png written");

        assert!(path.starts_with(&output));
        assert_eq!(image_rs::image_dimensions(&path).expect("readable"), (4, 3));
    }

    #[test]
    fn write_png_rejects_short_buffer() {
        let dir = tempdir().expect("temp dir");
        let result = write_png(dir.path(), 4, 3, vec![0u8; 5]);
        assert!(matches!(result, Err(Error::Camera(CameraError::Save(_)))));
    }
}
