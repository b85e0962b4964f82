//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "<message>"}` with the matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// No route matched (404)
    RouteNotFound,

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::RouteNotFound => "Not found".to_string(),
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::Database(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Validation(e) => tracing::debug!(error = %e, "rejected request body"),
            _ => {}
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_payload_is_400() {
        let response = ApiError::Validation(ValidationError::InvalidPayload).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid JSON data");
    }

    #[tokio::test]
    async fn missing_field_is_400() {
        let response = ApiError::from(ValidationError::MissingRequiredField).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "question and answer are required"
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound { resource: "Trivia" }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Trivia not found");
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn database_error_is_500_with_message() {
        let response = ApiError::from(DbError::Sqlx(sqlx::Error::PoolClosed)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("database error"));
    }
}
