//! Image acquisition for scans.
//!
//! Turns a raw file into a displayable preview plus an upload payload. No
//! size or format validation happens here; the backend may reject what it
//! cannot classify. Producing a selection touches no shared state: the
//! caller decides where the result is held.

use std::io::Cursor;
use std::path::Path;

use bytes::Bytes;
use image::ImageFormat;
use sha2::{Digest, Sha256};

use crate::error::ImageError;
use crate::traits::MultipartUpload;

/// Form field the backend reads the image from.
pub const UPLOAD_FIELD: &str = "file";

const FALLBACK_MIME: &str = "application/octet-stream";
const SHORT_FINGERPRINT_LEN: usize = 12;

/// An image file as chosen by the user, before any processing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    pub file_name: String,
    pub bytes: Bytes,
}

impl RawImage {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an image file without blocking the UI task.
    pub async fn read(path: &Path) -> Result<Self, ImageError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| ImageError::from_io(path, &e))?;
        if metadata.is_dir() {
            return Err(ImageError::IsDirectory {
                path: path.display().to_string(),
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ImageError::from_io(path, &e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(file_name, bytes))
    }
}

/// Local reference to a chosen image, used for display only.
///
/// Two handles are equal when they describe the same bytes under the same
/// name, which is what "the preview captured at submit time" means for a
/// terminal client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    pub file_name: String,
    pub mime: String,
    pub byte_len: usize,
    /// Pixel size, when the format is one we can decode headers for
    pub dimensions: Option<(u32, u32)>,
    /// Hex SHA-256 of the file contents
    pub fingerprint: String,
}

impl PreviewHandle {
    pub fn short_fingerprint(&self) -> &str {
        let end = self.fingerprint.len().min(SHORT_FINGERPRINT_LEN);
        &self.fingerprint[..end]
    }

    /// One-line summary such as `bottle.png · image/png · 640×480 · 12.3 KB`.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.file_name.clone(), self.mime.clone()];
        if let Some((w, h)) = self.dimensions {
            parts.push(format!("{}×{}", w, h));
        }
        parts.push(format_size(self.byte_len));
        parts.join(" · ")
    }
}

/// The bytes that go to `POST /api/scan`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPayload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl UploadPayload {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Wrap as the single multipart part the backend expects.
    pub fn to_upload(&self) -> MultipartUpload {
        MultipartUpload {
            field: UPLOAD_FIELD.to_string(),
            file_name: self.file_name.clone(),
            mime: self.mime.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

/// A preview and its upload payload, always produced together.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub preview: PreviewHandle,
    pub payload: UploadPayload,
}

/// Produce a preview and upload payload from a chosen file.
///
/// `None` means the picker was dismissed; the caller keeps whatever it
/// already had.
pub fn select_image(raw: Option<RawImage>) -> Option<SelectedImage> {
    let raw = raw?;
    let mime = detect_mime(&raw);
    let preview = PreviewHandle {
        file_name: raw.file_name.clone(),
        mime: mime.clone(),
        byte_len: raw.bytes.len(),
        dimensions: read_dimensions(&raw.bytes),
        fingerprint: hex::encode(Sha256::digest(&raw.bytes)),
    };
    let payload = UploadPayload {
        file_name: raw.file_name,
        mime,
        bytes: raw.bytes,
    };
    Some(SelectedImage { preview, payload })
}

fn detect_mime(raw: &RawImage) -> String {
    image::guess_format(&raw.bytes)
        .or_else(|_| ImageFormat::from_path(&raw.file_name))
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| FALLBACK_MIME.to_string())
}

fn read_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}
