// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Camera(CameraError),
    Permission(String),
}

/// Failures raised while talking to the camera backend.
#[derive(Debug, Clone)]
pub enum CameraError {
    /// No device answered at the requested index, or it refused the format.
    Init(String),

    /// The stream opened but a frame could not be fetched or decoded.
    Frame(String),

    /// The captured frame could not be written to disk.
    Save(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Init(msg) => write!(f, "Camera init error: {}", msg),
            CameraError::Frame(msg) => write!(f, "Camera frame error: {}", msg),
            CameraError::Save(msg) => write!(f, "Camera save error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Camera(e) => write!(f, "{}", e),
            Error::Permission(e) => write!(f, "Permission Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
