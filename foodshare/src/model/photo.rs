//! Inline photo handling.
//!
//! Photos travel and persist as `data:image/...;base64,` strings, never as
//! separate files. The byte size is derived from the base64 payload length
//! without decoding.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{FoodShareError, FoodShareResult};

/// Maximum inline photo size: 1 MiB of decoded image data.
pub const MAX_PHOTO_BYTES: usize = 1024 * 1024;

static DATA_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/(jpeg|jpg|png|gif|webp);base64,")
        .expect("photo data-URL pattern is valid")
});

/// Metadata extracted from an inline photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoMetadata {
    pub original_name: String,
    /// Approximate decoded size in bytes.
    pub size: usize,
    pub mime_type: String,
}

/// A validated inline photo with its extracted metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    data: String,
    metadata: PhotoMetadata,
}

impl Photo {
    /// Validates an inline data URL and extracts its metadata.
    ///
    /// Accepted formats are JPEG, PNG, GIF and WebP; the decoded payload must
    /// not exceed [`MAX_PHOTO_BYTES`].
    pub fn from_data_url(data: impl Into<String>) -> FoodShareResult<Self> {
        let data = data.into();
        let captures = DATA_URL_PATTERN.captures(&data).ok_or_else(|| {
            FoodShareError::InvalidPhoto(
                "must be a base64 encoded image (JPEG, PNG, GIF, or WebP)".to_string(),
            )
        })?;

        let subtype = captures
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or("jpg")
            .to_string();
        let payload = data.splitn(2, ',').nth(1).unwrap_or("");
        let size = payload.len() * 3 / 4;
        if size > MAX_PHOTO_BYTES {
            return Err(FoodShareError::PhotoTooLarge { size });
        }

        let metadata = PhotoMetadata {
            original_name: format!("food-photo-{}.{}", Utc::now().timestamp_millis(), subtype),
            size,
            mime_type: format!("image/{}", subtype),
        };

        Ok(Self { data, metadata })
    }

    /// The full `data:image/...;base64,` string.
    pub fn data_url(&self) -> &str {
        &self.data
    }

    /// The extracted metadata.
    pub fn metadata(&self) -> &PhotoMetadata {
        &self.metadata
    }
}
