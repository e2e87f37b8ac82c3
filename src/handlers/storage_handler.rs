use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use crate::config::AppState;
use crate::models::storage_model::{DeleteFileRequest, UploadResponse};
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        if name != "file" {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                return ResponseBuilder::error::<()>(
                    StatusCode::BAD_REQUEST,
                    "UPLOAD_ERR",
                    &e.to_string(),
                )
                .into_response();
            }
        };

        if data.len() > MAX_UPLOAD_BYTES {
            return ResponseBuilder::error::<()>(
                StatusCode::BAD_REQUEST,
                "UPLOAD_TOO_LARGE",
                "File size exceeds 10MB",
            )
            .into_response();
        }

        // Key is unique per upload; same-named files never collide
        let key = format!("projects/{}-{}", Uuid::now_v7(), file_name);

        return match state.storage.upload_file(data, key, content_type).await {
            Ok(url) => ResponseBuilder::created(
                "FILE_UPLOADED",
                "Upload complete",
                UploadResponse { url },
            )
            .into_response(),
            Err(e) => ResponseBuilder::error::<()>(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_UPLOAD_ERR",
                &format!("Upload failed: {}", e),
            )
            .into_response(),
        };
    }

    ResponseBuilder::error::<()>(StatusCode::BAD_REQUEST, "MISSING_FILE", "No file field")
        .into_response()
}

pub async fn delete_file_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DeleteFileRequest>,
) -> impl IntoResponse {
    match state.storage.delete_file(&payload.url).await {
        Ok(_) => ResponseBuilder::success::<()>("FILE_DELETED", "File deleted", ())
            .into_response(),
        Err(e) => ResponseBuilder::error::<()>(
            StatusCode::INTERNAL_SERVER_ERROR,
            "STORAGE_DELETE_ERR",
            &format!("Delete failed: {}", e),
        )
        .into_response(),
    }
}
