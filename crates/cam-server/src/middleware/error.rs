//! Error handling middleware for JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use cam_types::AppError;

use crate::types::ErrorResponse;

/// Application error that can be converted to HTTP response
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ErrorResponse,
}

impl ApiErrorResponse {
    pub fn new(
        status: StatusCode,
        error_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: ErrorResponse::new(error_type, message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request_error", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "authentication_error", message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, "rate_limit_error", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, "provider_error", message)
    }

    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::new(StatusCode::GATEWAY_TIMEOUT, "timeout_error", message)
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.error = self.error.with_param(param);
        self
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Convert AppError to ApiErrorResponse
impl From<AppError> for ApiErrorResponse {
    fn from(err: AppError) -> Self {
        match err {
            AppError::MalformedInput(msg) => {
                ApiErrorResponse::bad_request(format!("Malformed input: {}", msg))
            }
            AppError::Config(msg) => {
                ApiErrorResponse::bad_request(format!("Configuration error: {}", msg))
            }
            AppError::AssetResolution(msg) => {
                ApiErrorResponse::bad_gateway(format!("Asset resolution error: {}", msg))
            }
            timeout @ AppError::Timeout { .. } => {
                ApiErrorResponse::gateway_timeout(timeout.to_string())
            }
            AppError::NoResultGenerated => {
                ApiErrorResponse::bad_gateway("No image was generated by the model")
            }
            AppError::Provider(msg) => {
                ApiErrorResponse::bad_gateway(format!("Provider error: {}", msg))
            }
            AppError::Unauthorized => ApiErrorResponse::unauthorized("Unauthorized"),
            AppError::RateLimitExceeded => ApiErrorResponse::rate_limited("Rate limit exceeded"),
            AppError::Internal(msg) => ApiErrorResponse::internal_error(msg),
            AppError::Io(err) => ApiErrorResponse::internal_error(format!("IO error: {}", err)),
            AppError::Serialization(err) => {
                ApiErrorResponse::internal_error(format!("Serialization error: {}", err))
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiErrorResponse>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_504() {
        let resp = ApiErrorResponse::from(AppError::Timeout { elapsed_ms: 60001 });
        assert_eq!(resp.status, StatusCode::GATEWAY_TIMEOUT);
        assert!(resp.error.error.message.contains("60001"));
    }

    #[test]
    fn test_malformed_input_maps_to_400() {
        let resp = ApiErrorResponse::from(AppError::MalformedInput("bad".to_string()));
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_result_maps_to_502() {
        let resp = ApiErrorResponse::from(AppError::NoResultGenerated);
        assert_eq!(resp.status, StatusCode::BAD_GATEWAY);
    }
}
