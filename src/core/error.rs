use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiMessage;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Media store error: {0}")]
    MediaStore(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Everything that is not a not-found or a client mistake collapses
        // to the same opaque message; details stay in the logs.
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred".to_string(),
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MediaStore(ref msg) => {
                tracing::error!("Media store error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred".to_string(),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred".to_string(),
                )
            }
        };

        let body = Json(ApiMessage::new(message, status.as_u16()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let (status, body) = response_parts(AppError::NotFound("Image not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Image not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn validation_keeps_its_message() {
        let (status, body) = response_parts(AppError::Validation("No file provided".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "No file provided");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn media_store_errors_collapse_to_generic_500() {
        let (status, body) =
            response_parts(AppError::MediaStore("bucket unreachable".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "An error occurred");
        assert_eq!(body["status"], 500);
    }

    #[tokio::test]
    async fn internal_errors_collapse_to_generic_500() {
        let (status, body) = response_parts(AppError::Internal("boom".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "An error occurred");
        assert_eq!(body["status"], 500);
    }
}
