//! Error type shared by the library.

use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

/// Errors produced while loading, rendering or saving energy maps.
#[derive(Debug, Error)]
pub enum SeamError {
    /// The input path is missing or does not hold a decodable image.
    #[error("Failed to decode image {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    /// The output image could not be encoded or written.
    #[error("Failed to save image {}: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("Failed to create directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The render target does not have the dimensions of the energy map.
    #[error("Dimension mismatch: energy map is {}x{}, image is {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("Output path is empty")]
    EmptyOutputPath,
}

pub type Result<T> = std::result::Result<T, SeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = SeamError::DimensionMismatch {
            expected: (3, 2),
            actual: (4, 4),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: energy map is 3x2, image is 4x4"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SeamError::Decode {
            path: PathBuf::from("in.png"),
            source: ImageError::IoError(io),
        };
        assert!(err.to_string().starts_with("Failed to decode image in.png"));
        assert!(err.source().is_some());
    }
}
