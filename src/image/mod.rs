//! Encoded image ingestion
//!
//! Validates an uploaded image and turns it into a self-contained inline
//! encoding (a base64 `data:` URL). Both upload paths, file picker and
//! drag-and-drop, go through the same checks: the declared media type
//! must be an image and the payload must not exceed [`MAX_IMAGE_BYTES`].
//! The raw bytes are decoded once to confirm they are actually an image
//! before being re-encoded; nothing is written to disk.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted upload size (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Errors from image ingestion.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The declared media type is not an image type.
    #[error("not an image: {0}")]
    NotAnImage(String),
    /// The payload exceeds the 5 MiB upload limit.
    #[error("image is {0} bytes, limit is {MAX_IMAGE_BYTES}")]
    TooLarge(u64),
    /// The file could not be read or decoded as image data.
    #[error("failed to read image: {0}")]
    ReadError(String),
}

/// An opaque inline-encoded image (base64 `data:` URL).
///
/// Self-contained by construction: a record holding one of these has no
/// reference back to the file it was ingested from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// The `data:` URL, suitable for an `img src` attribute.
    pub fn data_url(&self) -> &str {
        &self.0
    }
}

/// Ingest an image from a file path (the click-to-upload path).
///
/// The media type is taken from the file name, mirroring the browser's
/// declared MIME type. Size is checked against metadata before the file
/// is read so an oversized file is never pulled into memory.
pub async fn ingest(path: &Path) -> Result<EncodedImage, IngestError> {
    let mime = declared_image_type(path)?;

    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|e| IngestError::ReadError(e.to_string()))?;
    if meta.len() > MAX_IMAGE_BYTES {
        return Err(IngestError::TooLarge(meta.len()));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| IngestError::ReadError(e.to_string()))?;

    encode(mime.essence_str(), &bytes)
}

/// Ingest an image from raw bytes with a declared media type (the
/// drag-and-drop path). Applies the same validation as [`ingest`].
pub async fn ingest_bytes(declared_type: &str, bytes: &[u8]) -> Result<EncodedImage, IngestError> {
    if !declared_type.starts_with("image/") {
        return Err(IngestError::NotAnImage(declared_type.to_string()));
    }
    if bytes.len() as u64 > MAX_IMAGE_BYTES {
        return Err(IngestError::TooLarge(bytes.len() as u64));
    }

    encode(declared_type, bytes)
}

fn declared_image_type(path: &Path) -> Result<mime_guess::Mime, IngestError> {
    let mime = mime_guess::from_path(path)
        .first()
        .ok_or_else(|| IngestError::NotAnImage("unknown".to_string()))?;
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(IngestError::NotAnImage(mime.essence_str().to_string()));
    }
    Ok(mime)
}

/// Verify the bytes decode as an image, then inline-encode them.
fn encode(media_type: &str, bytes: &[u8]) -> Result<EncodedImage, IngestError> {
    image::load_from_memory(bytes).map_err(|e| IngestError::ReadError(e.to_string()))?;

    let encoded = STANDARD.encode(bytes);
    Ok(EncodedImage(format!(
        "data:{};base64,{}",
        media_type, encoded
    )))
}
