//! Uploaded image registry entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file accepted by the image-upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub filename: String,
    pub url: String,
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
}

/// Request payload for an image upload.
///
/// `file` is a data URL (`data:image/png;base64,...`) or a bare base64
/// payload; `filename` is the client-side name, sanitized server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    pub file: String,
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_filename() -> String {
    "unnamed".to_string()
}
