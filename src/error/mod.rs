//! Application error types and their HTTP rendering.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Generic body for every authentication failure. Never varies with the cause.
pub const UNAUTHORIZED_MESSAGE: &str = "Not authorized.";

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authorized")]
    Unauthorized,

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Storage(_) | AppError::Hashing(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(format!("Could not parse request data: {}", e.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::DuplicateEmail => "Email already registered".to_string(),
            AppError::NotFound(what) => (*what).to_string(),
            AppError::InvalidCredentials => "Invalid email or password.".to_string(),
            AppError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            AppError::Storage(e) => {
                error!(error = %e, "storage failure");
                "Storage error".to_string()
            }
            AppError::Hashing(e) => {
                error!(error = %e, "password hashing failure");
                "Internal error".to_string()
            }
            AppError::Internal(e) => {
                error!(error = %e, "internal failure");
                "Internal error".to_string()
            }
        };

        let body = Json(json!({ "error": message }));
        (self.status(), body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unauthorized_renders_generic_message() {
        let (status, json) = body_json(AppError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], UNAUTHORIZED_MESSAGE);
    }

    #[tokio::test]
    async fn storage_error_hides_detail() {
        let (status, json) = body_json(AppError::Storage(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Storage error");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound("Event not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
    }
}
