use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced to API callers
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Weather API error: {0}")]
    ProviderError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Failed to fetch weather data: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderError(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ProviderError(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Failures of a single outbound JSON request
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {0} timed out")]
    Timeout(String),

    #[error("{url} responded with HTTP {status}")]
    Status { status: u16, url: String },

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_category() {
        assert_eq!(
            AppError::provider("bad key").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::validation("missing field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("Weather data not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::unavailable("connection refused").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn detail_messages_carry_their_cause() {
        assert_eq!(
            AppError::provider("invalid location").to_string(),
            "Weather API error: invalid location"
        );
        assert_eq!(
            AppError::unavailable("timed out").to_string(),
            "Failed to fetch weather data: timed out"
        );
        assert_eq!(
            AppError::not_found("Weather data not found").to_string(),
            "Weather data not found"
        );
    }

    #[tokio::test]
    async fn response_body_uses_detail_field() {
        let response = AppError::not_found("Weather data not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");
        assert_eq!(body, serde_json::json!({ "detail": "Weather data not found" }));
    }
}
