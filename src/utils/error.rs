//! Error handling for the gateway
//!
//! This module defines all error types used throughout the gateway.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Rate limiting errors
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream HTTP errors
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Service unavailable errors
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for GatewayError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            GatewayError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            GatewayError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            GatewayError::Auth(_) => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "AUTH_ERROR",
                self.to_string(),
            ),
            GatewayError::RateLimit(_) => (
                actix_web::http::StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMIT_EXCEEDED",
                self.to_string(),
            ),
            GatewayError::Crypto(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CRYPTO_ERROR",
                "Cryptographic operation failed".to_string(),
            ),
            GatewayError::BadRequest(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                self.to_string(),
            ),
            GatewayError::Upstream(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Upstream request failed".to_string(),
            ),
            GatewayError::Serialization(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "SERIALIZATION_ERROR",
                self.to_string(),
            ),
            GatewayError::Io(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                "IO operation failed".to_string(),
            ),
            GatewayError::ServiceUnavailable(_) => (
                actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                self.to_string(),
            ),
            GatewayError::Internal(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                self.to_string(),
            ),
        };

        HttpResponse::build(status_code).json(serde_json::json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message,
            }
        }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            GatewayError::Validation(_)
            | GatewayError::BadRequest(_)
            | GatewayError::Serialization(_) => actix_web::http::StatusCode::BAD_REQUEST,
            GatewayError::Auth(_) => actix_web::http::StatusCode::UNAUTHORIZED,
            GatewayError::RateLimit(_) => actix_web::http::StatusCode::TOO_MANY_REQUESTS,
            GatewayError::Upstream(_) => actix_web::http::StatusCode::BAD_GATEWAY,
            GatewayError::ServiceUnavailable(_) => {
                actix_web::http::StatusCode::SERVICE_UNAVAILABLE
            }
            _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GatewayError::Auth("nope".into()).status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::RateLimit("slow down".into()).status_code(),
            actix_web::http::StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            GatewayError::Validation("bad".into()).status_code(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_display() {
        let err = GatewayError::Config("missing ADMIN_SECRET".into());
        assert_eq!(err.to_string(), "Configuration error: missing ADMIN_SECRET");
    }
}
