//! Upload Handlers
//!
//! Multipart uploads stored on local disk. Anything else under `/uploads`
//! is served from the upload directory.

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tower_http::services::ServeDir;

use crate::domain::models::UploadKind;
use crate::infrastructure::driving_adapters::api_rest::dto::upload::UploadResponseDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

const FILE_FIELD: &str = "file";

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Routes relative to `/uploads`
pub fn router(max_file_bytes: usize, directory: String) -> Router<AppState> {
    Router::new()
        .route("/images", post(upload_image))
        .route("/files", post(upload_file))
        .layer(DefaultBodyLimit::max(max_file_bytes + MULTIPART_OVERHEAD))
        .fallback_service(ServeDir::new(directory))
}

/// POST /uploads/images - png, jpeg, gif or webp
///
/// # Responses
///
/// * 201 Created - `{ url, fileName, originalName, contentType, size }`
/// * 400 Bad Request - Missing `file` field, empty file or disallowed type
/// * 413 Payload Too Large - Above `uploads.max_image_bytes`
#[axum::debug_handler]
async fn upload_image(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponseDto>), ApiError> {
    store(&state, &user.id, UploadKind::Image, multipart).await
}

/// POST /uploads/files - Images plus pdf, csv, plain text, docx and xlsx
#[axum::debug_handler]
async fn upload_file(
    JwtAuth(user): JwtAuth,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponseDto>), ApiError> {
    store(&state, &user.id, UploadKind::File, multipart).await
}

async fn store(
    state: &AppState,
    user_id: &str,
    kind: UploadKind,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponseDto>), ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let stored = state
            .uploads
            .execute(user_id, kind, &original_name, &content_type, &bytes)
            .await?;
        return Ok((StatusCode::CREATED, Json(stored.into())));
    }

    Err(UseCaseError::validation("file: multipart field is required").into())
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UseCaseError::PayloadTooLarge(err.body_text()).into()
    } else {
        ApiError::BadRequest(err.body_text())
    }
}
