// SPDX-License-Identifier: MPL-2.0
//! Image header reads.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Reads the natural pixel size of the image at `path` without decoding the
/// pixel data.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    Ok(image_rs::image_dimensions(path)?)
}

/// Async wrapper around [`read_dimensions`], run off the UI thread.
pub async fn query_size(path: PathBuf) -> Result<(u32, u32)> {
    tokio::task::spawn_blocking(move || read_dimensions(&path))
        .await
        .map_err(|e| crate::error::Error::Io(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn reads_dimensions_of_png() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("wide.png");
        image_rs::RgbImage::new(40, 25)
            .save(&path)
            .expect("write fixture");

        assert_eq!(read_dimensions(&path).expect("dimensions"), (40, 25));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let result = read_dimensions(&dir.path().join("absent.png"));
        assert!(result.is_err());
    }

    #[test]
    fn garbage_file_is_an_image_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").expect("write fixture");

        assert!(matches!(read_dimensions(&path), Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn query_size_runs_off_thread() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("tall.png");
        image_rs::RgbImage::new(10, 30)
            .save(&path)
            .expect("write fixture");

        assert_eq!(query_size(path).await.expect("dimensions"), (10, 30));
    }
}
