//! API error types with IntoResponse
//!
//! Import failures become `{"error": "..."}` JSON bodies. A missing article
//! is a plain-text 404, matching the HTML routes it comes from.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::import::ImportError;

/// Body returned for an unknown article
pub const ARTICLE_NOT_FOUND: &str = "Article not found";

/// Body returned when no usable payload was sent to the import route
pub const NO_PAYLOAD: &str = "No file part in the request or no selected file, or empty data";

/// Body returned when the uploaded file is not a `.json` file
pub const INVALID_FILE_TYPE: &str = "Invalid file type. Please upload a JSON file.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Article lookup found nothing (404, plain text)
    ArticleNotFound,

    /// Client sent an unusable request (400)
    BadRequest { message: String },

    /// Import failed (400 or 500 depending on the cause)
    Import(ImportError),

    /// Template rendering failed (500, logged)
    Render(askama::Error),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::ArticleNotFound => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Import(ImportError::Store { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Import(_) => StatusCode::BAD_REQUEST,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::ArticleNotFound => (status, ARTICLE_NOT_FOUND).into_response(),
            Self::BadRequest { message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            Self::Import(e) => {
                if let ImportError::Store { index, inserted, .. } = &e {
                    tracing::error!(index, inserted, error = %e, "import aborted by store failure");
                }
                (status, Json(json!({ "error": e.to_string() }))).into_response()
            }
            Self::Render(e) => {
                tracing::error!("Template error: {}", e);
                (status, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(e: ImportError) -> Self {
        Self::Import(e)
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        Self::Render(e)
    }
}
