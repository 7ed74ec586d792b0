// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

// Convert other error types to ApiError
impl From<crate::session::TokenError> for ApiError {
    fn from(err: crate::session::TokenError) -> Self {
        match err {
            crate::session::TokenError::MissingSecret => {
                tracing::error!("JWT secret not configured");
                ApiError::internal_server_error("Authentication is not configured")
            }
            crate::session::TokenError::Generation(msg) => {
                tracing::error!("Token generation failed: {}", msg);
                ApiError::internal_server_error("Failed to issue session token")
            }
            crate::session::TokenError::Invalid(msg) => ApiError::unauthorized(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TokenError;

    #[test]
    fn status_codes_and_payload() {
        let err = ApiError::unauthorized("Invalid session token");
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "UNAUTHORIZED");

        let body = err.to_json();
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Invalid session token");
        assert_eq!(body["code"], "UNAUTHORIZED");

        assert_eq!(ApiError::bad_request("x").status_code(), 400);
        assert_eq!(ApiError::internal_server_error("x").status_code(), 500);
    }

    #[test]
    fn token_errors_map_to_the_right_status() {
        // Client-caused: bad token is a 401
        let err = ApiError::from(TokenError::Invalid("expired".to_string()));
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.message(), "expired");

        // Server-caused: configuration and generation failures are 500s
        // with the detail kept out of the response
        for source in [
            TokenError::MissingSecret,
            TokenError::Generation("boom".to_string()),
        ] {
            let err = ApiError::from(source);
            assert_eq!(err.status_code(), 500);
            assert!(!err.message().contains("boom"));
        }
    }
}
