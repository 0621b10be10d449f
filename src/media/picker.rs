// SPDX-License-Identifier: MPL-2.0
//! Library picker backed by the native file dialog.

use super::{AcquisitionResponse, IMAGE_EXTENSIONS};
use std::path::PathBuf;

/// Most photos a single library selection may return.
pub const MAX_SELECTION: usize = 2;

/// Opens a multi-select file dialog filtered to images.
///
/// Closing the dialog yields a canceled response. Selections longer than
/// [`MAX_SELECTION`] are truncated in the order the dialog returned them.
pub async fn pick_photos(title: String, filter_name: String) -> AcquisitionResponse {
    let dialog = rfd::AsyncFileDialog::new()
        .set_title(&title)
        .add_filter(&filter_name, IMAGE_EXTENSIONS);

    match dialog.pick_files().await {
        Some(handles) => {
            let paths: Vec<PathBuf> = handles
                .iter()
                .map(|handle| handle.path().to_path_buf())
                .collect();
            limit_selection(paths)
        }
        None => AcquisitionResponse::canceled(),
    }
}

fn limit_selection(mut paths: Vec<PathBuf>) -> AcquisitionResponse {
    if paths.len() > MAX_SELECTION {
        log::debug!(
            "Library selection had {} photos, keeping the first {}",
            paths.len(),
            MAX_SELECTION
        );
        paths.truncate(MAX_SELECTION);
    }
    AcquisitionResponse::from_paths(paths)
}
