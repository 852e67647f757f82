//! Bulk JSON import endpoint
//!
//! Accepts either a multipart upload with a `file` field or a raw JSON body.
//! A multipart content type selects the upload path; anything else is read
//! as a raw body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequest, Multipart, Request, State},
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::db::ArticleRepo;
use crate::http::error::{ApiError, INVALID_FILE_TYPE, NO_PAYLOAD};
use crate::http::server::AppState;
use crate::import;

/// Message returned when every article was stored
pub const IMPORT_SUCCESS: &str = "Articles imported successfully!";

/// Multipart field carrying the uploaded file
const FILE_FIELD: &str = "file";

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Pull the `file` field out of a multipart upload.
///
/// The filename is checked before the content is read.
async fn read_upload(mut multipart: Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to parse multipart data: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_owned();
        if file_name.is_empty() {
            return Err(ApiError::bad_request(NO_PAYLOAD));
        }
        if !file_name.ends_with(".json") {
            return Err(ApiError::bad_request(INVALID_FILE_TYPE));
        }

        tracing::info!(file_name = %file_name, "reading uploaded import file");
        return field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)));
    }

    Err(ApiError::bad_request(NO_PAYLOAD))
}

/// POST /import_json - import a JSON array of articles
async fn import_json(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let payload = if is_multipart(request.headers()) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        read_upload(multipart).await?
    } else {
        let body = Bytes::from_request(request, &state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        if body.is_empty() {
            return Err(ApiError::bad_request(NO_PAYLOAD));
        }
        body
    };

    let repo = ArticleRepo::new(&state.store);
    import::import_payload(&repo, &payload).await?;

    Ok((StatusCode::CREATED, Json(json!({ "success": IMPORT_SUCCESS }))))
}

/// Import routes
///
/// Imports are not size-capped, so axum's default body limit is lifted here.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/import_json",
        post(import_json).layer(DefaultBodyLimit::disable()),
    )
}
