use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ProcessingError;
use crate::domain::ValidationError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct GatewayErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Any failure of the processing pipeline, as seen by the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            ApiError::Validation(e) => tracing::warn!(error = %e, "Rejected upload"),
            ApiError::Processing(e) => tracing::error!(error = %e, "Processing failed"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Error body shape of the browser-facing `/api/upload` route.
#[derive(Debug)]
pub struct GatewayError(pub ApiError);

impl From<ApiError> for GatewayError {
    fn from(error: ApiError) -> Self {
        GatewayError(error)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.0.log();
        match self.0 {
            ApiError::Validation(ValidationError::NoFilePart | ValidationError::NoSelectedFile) => {
                (
                    StatusCode::BAD_REQUEST,
                    Json(GatewayErrorResponse {
                        message: "Please upload a file!".to_string(),
                        error: None,
                    }),
                )
                    .into_response()
            }
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GatewayErrorResponse {
                    message: "Failed to process the document.".to_string(),
                    error: Some(other.to_string()),
                }),
            )
                .into_response(),
        }
    }
}
