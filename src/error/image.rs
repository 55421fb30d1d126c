//! Errors from reading an image off disk.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Reading the chosen image failed.
///
/// The file picker treats this the same as "no file chosen": the previous
/// selection stays in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImageError {
    #[error("no such file: {path}")]
    NotFound { path: String },

    #[error("{path} is a directory")]
    IsDirectory { path: String },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl ImageError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => ImageError::NotFound { path },
            _ => ImageError::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ImageError::NotFound { .. } => "E_IMG_NOT_FOUND",
            ImageError::IsDirectory { .. } => "E_IMG_DIR",
            ImageError::Io { .. } => "E_IMG_IO",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ImageError::NotFound { path } => format!("File not found: {}", path),
            ImageError::IsDirectory { path } => format!("Not a file: {}", path),
            ImageError::Io { path, .. } => format!("Could not read {}", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let image_err = ImageError::from_io(Path::new("/tmp/missing.png"), &err);
        assert_eq!(
            image_err,
            ImageError::NotFound {
                path: "/tmp/missing.png".to_string()
            }
        );
        assert_eq!(image_err.error_code(), "E_IMG_NOT_FOUND");
    }

    #[test]
    fn test_from_io_other() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let image_err = ImageError::from_io(Path::new("secret.png"), &err);
        assert!(matches!(image_err, ImageError::Io { .. }));
        assert_eq!(image_err.user_message(), "Could not read secret.png");
    }
}
