use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{error::ApiError, extractors::auth::AuthUser, state::AppState};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Multipart upload for invitation media. The rest of the system only
/// ever stores the returned URL string, never the bytes.
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("unnamed").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
            file_data = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) =
        file_data.ok_or_else(|| ApiError::BadRequest("Missing 'file' field".to_string()))?;

    if bytes.len() as u64 > state.settings.uploads.max_size_bytes {
        return Err(ApiError::BadRequest("File too large".to_string()));
    }

    let extension = Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    let storage_name = format!("{}-{}.{}", auth.user_id.to_hex(), uuid::Uuid::new_v4(), extension);

    let upload_dir = PathBuf::from(&state.settings.uploads.dir);
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to create upload dir: {}", e)))?;

    let file_path = upload_dir.join(&storage_name);
    tokio::fs::write(&file_path, &bytes)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to write file: {}", e)))?;

    debug!(file = %storage_name, size = bytes.len(), "Stored upload");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: format!("/uploads/{}", storage_name),
        }),
    ))
}
