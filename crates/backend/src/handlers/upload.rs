use axum::extract::{Multipart, State};
use axum::Json;
use contracts::shared::api::UploadResponse;
use uuid::Uuid;

use crate::shared::data::store::UploadSettings;
use crate::shared::data::AppState;
use crate::shared::error::ApiError;

/// POST /api/admin/upload
///
/// Принимает multipart-поле `file`, сохраняет его в каталог загрузок и
/// возвращает публичный URL.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)))?;

        let response = save_upload(&state.uploads, &original_name, &bytes).await?;
        return Ok(Json(response));
    }

    Err(ApiError::bad_request("File field is missing"))
}

/// Write the bytes under a unique name and build the public URL
pub async fn save_upload(
    settings: &UploadSettings,
    original_name: &str,
    bytes: &[u8],
) -> Result<UploadResponse, ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::bad_request("File is empty"));
    }

    let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(original_name));

    tokio::fs::create_dir_all(&settings.dir)
        .await
        .map_err(|e| anyhow::anyhow!("create {}: {}", settings.dir.display(), e))?;
    tokio::fs::write(settings.dir.join(&stored_name), bytes)
        .await
        .map_err(|e| anyhow::anyhow!("write {}: {}", stored_name, e))?;

    tracing::info!(file = %stored_name, size = bytes.len(), "Upload stored");

    Ok(UploadResponse {
        url: format!("{}/{}", settings.public_path.trim_end_matches('/'), stored_name),
    })
}

/// Keep only the final path component and replace anything outside `[A-Za-z0-9._-]`
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
