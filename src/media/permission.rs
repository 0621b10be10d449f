// SPDX-License-Identifier: MPL-2.0
//! Camera permission: checking, requesting and the settings fallback.
//!
//! On macOS the camera backend asks the OS for authorization. Other platforms
//! grant access at the device level, so the backend reports success directly.

use crate::error::{Error, Result};
use std::future::Future;

/// Returns true if the camera may be used right now.
#[must_use]
pub fn has_permission() -> bool {
    backend::has_permission()
}

/// Asks the OS for camera access and resolves with the user's answer.
pub async fn request_permission() -> bool {
    if has_permission() {
        return true;
    }
    backend::request_permission().await
}

/// Requests access and falls back to the system privacy settings when the
/// user refuses. Resolves with the final permission flag.
pub async fn request_or_open_settings() -> bool {
    request_or_fallback(request_permission(), open_settings).await
}

/// Awaits `request`; when it resolves to `false`, calls `open_fallback` once.
/// A failing fallback is logged, never returned.
pub async fn request_or_fallback<R, F>(request: R, open_fallback: F) -> bool
where
    R: Future<Output = bool>,
    F: FnOnce() -> Result<()>,
{
    let granted = request.await;
    if !granted {
        log::info!("Camera permission refused, opening system settings");
        if let Err(err) = open_fallback() {
            log::warn!("{err}");
        }
    }
    granted
}

/// Opens the platform's camera privacy settings.
pub fn open_settings() -> Result<()> {
    open_settings_target().map_err(|e| Error::Permission(format!("Cannot open settings: {e}")))
}

#[cfg(target_os = "macos")]
fn open_settings_target() -> std::io::Result<()> {
    open::that("x-apple.systempreferences:com.apple.preference.security?Privacy_Camera")
}

#[cfg(target_os = "windows")]
fn open_settings_target() -> std::io::Result<()> {
    open::that("ms-settings:privacy-webcam")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_settings_target() -> std::io::Result<()> {
    open::with("privacy", "gnome-control-center")
}

#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
mod backend {
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    pub(super) fn has_permission() -> bool {
        nokhwa::nokhwa_check()
    }

    pub(super) async fn request_permission() -> bool {
        let (sender, receiver) = oneshot::channel();
        let sender = Mutex::new(Some(sender));
        nokhwa::nokhwa_initialize(move |granted| {
            let pending = sender.lock().ok().and_then(|mut slot| slot.take());
            if let Some(sender) = pending {
                // Receiver gone means the request was abandoned
                let _ = sender.send(granted);
            }
        });

        match receiver.await {
            Ok(granted) => granted,
            Err(_) => {
                log::warn!("Camera permission callback was dropped without an answer");
                false
            }
        }
    }
}

// No camera backend: nothing gates access, captures fail on their own
#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
mod backend {
    pub(super) fn has_permission() -> bool {
        true
    }

    pub(super) async fn request_permission() -> bool {
        true
    }
}
