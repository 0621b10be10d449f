// SPDX-License-Identifier: MPL-2.0
//! Photo acquisition: library picker, camera capture, camera permission and
//! image header reads.
//!
//! Picker and camera share one response shape, [`AcquisitionResponse`], so the
//! comparison screen treats both flows the same way.

pub mod camera;
pub mod image;
pub mod permission;
pub mod picker;

use std::path::{Path, PathBuf};

pub use camera::{capture_photo, CaptureRequest};
pub use image::query_size;
pub use picker::pick_photos;

/// Extensions accepted by the library picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp",
];

/// A single acquired photo on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: PathBuf,
}

impl Asset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of a picker or camera flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcquisitionResponse {
    pub assets: Vec<Asset>,
    pub canceled: bool,
}

impl AcquisitionResponse {
    /// Response for a flow the user backed out of.
    #[must_use]
    pub fn canceled() -> Self {
        Self {
            assets: Vec::new(),
            canceled: true,
        }
    }

    #[must_use]
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self {
            assets: paths.into_iter().map(Asset::new).collect(),
            canceled: false,
        }
    }

    /// Path of the first asset, if the flow produced one.
    #[must_use]
    pub fn first_path(&self) -> Option<&Path> {
        if self.canceled {
            return None;
        }
        self.assets.first().map(|asset| asset.path.as_path())
    }

    /// Paths of every returned asset, in the order the flow produced them.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        let take = if self.canceled { 0 } else { self.assets.len() };
        self.assets.iter().take(take).map(|asset| asset.path.as_path())
    }
}

/// Returns true if `path` has an extension the picker accepts.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(ext))
        })
}
