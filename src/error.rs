//! Error types for the blob-cutout crate.

use std::path::PathBuf;

/// Errors that can occur at the I/O and configuration edges of the pipeline.
///
/// Classification, labeling, selection and reconstruction are infallible on
/// in-memory data; every variant here comes from decoding, encoding, the
/// filesystem, or invalid options.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source image is missing or could not be decoded.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        /// Path of the source image.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// The output image could not be encoded or written.
    #[error("failed to write {}: {source}", .path.display())]
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Underlying encoder error.
        source: image::ImageError,
    },

    /// The destination directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A batch input directory could not be listed.
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The secondary blob ratio is negative or not finite.
    #[error("invalid secondary blob ratio {0}: must be a finite value >= 0")]
    InvalidRatio(f32),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let create = Error::CreateDir {
            path: PathBuf::from("/nope/out"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = create.to_string();
        assert!(msg.contains("/nope/out"));
        assert!(msg.contains("denied"));

        let ratio = Error::InvalidRatio(-0.5);
        assert!(ratio.to_string().contains("-0.5"));

        let decode = Error::Decode {
            path: PathBuf::from("bird.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "gone",
            )),
        };
        let msg = decode.to_string();
        assert!(msg.contains("bird.png"));
        assert!(msg.contains("gone"));
    }
}
