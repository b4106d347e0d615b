//! Image upload endpoint handlers.
//!
//! Uploads arrive as a data URL (or bare base64 payload). The decoded
//! bytes are size-capped, written under the uploads directory with a
//! collision-free name, and registered in the upload ledger. Files are
//! served statically under `/uploads`.

use axum::{extract::State, http::StatusCode, Json};
use base64::Engine;
use chrono::Utc;

use domain::models::upload::{UploadImageRequest, UploadedImage};
use shared::crypto::sha256_hex;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_image_uploaded;

/// Strips a `data:<mime>;base64,` prefix when present.
fn base64_payload(file: &str) -> &str {
    match file.split_once(";base64,") {
        Some((prefix, payload)) if prefix.starts_with("data:") => payload,
        _ => file,
    }
}

/// Keeps only filesystem-safe characters of a client-supplied filename.
fn sanitize_filename(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if safe.trim_matches('_').is_empty() {
        "unnamed".to_string()
    } else {
        safe
    }
}

/// Accept an image upload.
///
/// POST /api/admin/uploads
pub async fn upload(
    State(state): State<AppState>,
    Json(request): Json<UploadImageRequest>,
) -> Result<(StatusCode, Json<UploadedImage>), ApiError> {
    let payload = base64_payload(&request.file);
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| ApiError::Validation("File is not valid base64".into()))?;

    if bytes.is_empty() {
        return Err(ApiError::Validation("File is empty".into()));
    }
    let limit = state.config.storage.max_upload_bytes;
    if bytes.len() > limit {
        return Err(ApiError::PayloadTooLarge(format!(
            "File exceeds the {} byte limit",
            limit
        )));
    }

    let now = Utc::now();
    let digest = sha256_hex(payload);
    let stored_name = format!(
        "{}-{}-{}",
        now.timestamp_millis(),
        &digest[..8],
        sanitize_filename(&request.filename)
    );

    let path = state.config.storage.uploads_dir.join(&stored_name);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to store upload: {}", e)))?;

    let image = state
        .repos
        .uploads
        .register(UploadedImage {
            filename: stored_name.clone(),
            url: format!("/uploads/{}", stored_name),
            size: bytes.len(),
            uploaded_at: now,
        })
        .await?;

    record_image_uploaded(image.size);
    tracing::info!(filename = %image.filename, size = image.size, "Image uploaded");

    Ok((StatusCode::CREATED, Json(image)))
}

/// List registered uploads, newest first.
///
/// GET /api/admin/uploads
pub async fn list(State(state): State<AppState>) -> Json<Vec<UploadedImage>> {
    Json(state.repos.uploads.list().await)
}
