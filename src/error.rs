// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

/// 저장소 오류 발생 시 응답 메시지 (상세 내용은 로그에만 남김)
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred, please try again.";

// region:    --- Store Error

/// 저장소 오류
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// endregion: --- Store Error

// region:    --- Config Error

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

// endregion: --- Config Error

// region:    --- App Error

/// 핸들러 오류
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            AppError::InvalidBody { status, message } => (status, message),
            AppError::Store(e) => {
                error!("{:<12} --> 저장소 오류: {:?}", "Error", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// endregion: --- App Error
