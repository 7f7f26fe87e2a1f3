use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobboard_storage::{ParseError, UploadError};
use serde_json::json;
use thiserror::Error;

/// Handler error rendered as `{"error": {"code", "message"}}`.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            WebError::Upload(err) | WebError::Parse(ParseError::Upload(err)) => upload_status(err),
            WebError::Parse(ParseError::MissingFileUrl) => (StatusCode::BAD_REQUEST, "MISSING_FILE_URL"),
            WebError::Parse(ParseError::UnknownResume(_)) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            WebError::Internal(err) => {
                tracing::error!("internal error: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };
        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "An internal server error occurred".to_string(),
            _ => self.to_string(),
        };
        (
            status,
            Json(json!({
                "error": {
                    "code": code,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}

fn upload_status(err: &UploadError) -> (StatusCode, &'static str) {
    match err {
        UploadError::InvalidType(_) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, "INVALID_FILE_TYPE"),
        UploadError::TooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE"),
        UploadError::InvalidKey(_) => (StatusCode::BAD_REQUEST, "INVALID_KEY"),
        UploadError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        UploadError::Storage(err) => {
            tracing::error!("storage error: {err:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    }
}
