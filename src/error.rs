// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Geometry(GeometryError),
}

/// Invalid zoom viewer geometry, detected when the viewer is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Thumbnail edge length is zero, negative or not a finite number.
    InvalidDimension(f32),

    /// Preview box edge length is zero, negative or not a finite number.
    InvalidPreviewSize(f32),

    /// Preview box does not fit inside the thumbnail.
    PreviewLargerThanDimension { preview_size: f32, dimension: f32 },

    /// Magnification must be a finite factor strictly above 1.
    InvalidZoomScale(f32),

    /// Corner radius is negative or not a finite number.
    InvalidCornerRadius(f32),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimension(value) => {
                write!(f, "dimension must be a positive number, got {}", value)
            }
            GeometryError::InvalidPreviewSize(value) => {
                write!(f, "preview size must be a positive number, got {}", value)
            }
            GeometryError::PreviewLargerThanDimension {
                preview_size,
                dimension,
            } => write!(
                f,
                "preview size {} exceeds thumbnail dimension {}",
                preview_size, dimension
            ),
            GeometryError::InvalidZoomScale(value) => {
                write!(f, "zoom scale must be greater than 1, got {}", value)
            }
            GeometryError::InvalidCornerRadius(value) => {
                write!(f, "corner radius must not be negative, got {}", value)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Geometry(e) => write!(f, "Geometry Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Error::Geometry(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Image(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn geometry_error_wraps_into_crate_error() {
        let err: Error = GeometryError::PreviewLargerThanDimension {
            preview_size: 500.0,
            dimension: 400.0,
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "Geometry Error: preview size 500 exceeds thumbnail dimension 400"
        );
    }

    #[test]
    fn zoom_scale_error_mentions_value() {
        let err = GeometryError::InvalidZoomScale(0.5);
        assert!(format!("{}", err).contains("0.5"));
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let err: Error = image_rs::ImageError::IoError(std::io::Error::other("gone")).into();
        assert!(matches!(err, Error::Io(message) if message.contains("gone")));
    }
}
