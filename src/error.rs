use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Distinct reasons a bearer credential can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing credential")]
    MissingCredential,
    #[error("malformed credential")]
    MalformedCredential,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("expired credential")]
    ExpiredCredential,
}

impl AuthError {
    fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::MalformedCredential => "malformed_credential",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::ExpiredCredential => "expired_credential",
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Normal admission-control rejection.
    #[error("rate limit exceeded")]
    RateLimitExceeded { limit: u64, reset_secs: u64 },

    /// The counter store could not be reached. Requests are rejected,
    /// never admitted, while the store is down.
    #[error("rate limiter unavailable: {0}")]
    RateLimitUnavailable(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("validation failed: {0}")]
    Validation(String),

    /// A per-call backend fault. Surfaced to the caller, never retried here.
    #[error("backend call failed: {0}")]
    Backend(#[from] tonic::Status),

    /// Startup-only: a required backend could not be dialed.
    #[error("failed to dial {service} at {address}: {source}")]
    BackendDial {
        service: &'static str,
        address: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<redis::RedisError> for GatewayError {
    fn from(err: redis::RedisError) -> Self {
        GatewayError::RateLimitUnavailable(err.to_string())
    }
}

impl From<validator::ValidationErrors> for GatewayError {
    fn from(err: validator::ValidationErrors) -> Self {
        GatewayError::Validation(err.to_string())
    }
}

/// Structured JSON body attached to every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            code,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::RateLimitExceeded { limit, reset_secs } => {
                let body = serde_json::json!({
                    "error": "rate_limit_exceeded",
                    "message": "Request rate limit exceeded",
                    "code": 429,
                    "limit": limit,
                    "remaining": 0,
                    "reset": reset_secs,
                });
                (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response()
            }
            GatewayError::RateLimitUnavailable(msg) => {
                tracing::error!(target: "api_gateway::rate_limiter", %msg, "counter store unreachable");
                respond(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "rate_limit_unavailable",
                    "Rate limiting is temporarily unavailable",
                )
            }
            GatewayError::Auth(err) => {
                respond(StatusCode::UNAUTHORIZED, err.code(), &err.to_string())
            }
            GatewayError::InvalidRequest(msg) => {
                respond(StatusCode::BAD_REQUEST, "bad_request", &msg)
            }
            GatewayError::Validation(msg) => {
                respond(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", &msg)
            }
            GatewayError::Backend(status) => backend_fault(status),
            GatewayError::BackendDial { service, address, source } => {
                // Only reachable if a dial error escapes startup; never served.
                tracing::error!(service, %address, error = %source, "backend dial failure");
                respond(
                    StatusCode::BAD_GATEWAY,
                    "backend_error",
                    "Backend service unavailable",
                )
            }
            GatewayError::Internal(msg) => {
                tracing::error!(%msg, "internal error");
                respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        }
    }
}

/// Maps a gRPC fault onto one HTTP status. The verbatim backend message is
/// logged but never echoed to the client.
fn backend_fault(status: tonic::Status) -> Response {
    tracing::warn!(
        target: "api_gateway::backend",
        code = ?status.code(),
        message = status.message(),
        "backend call failed"
    );
    match status.code() {
        tonic::Code::NotFound => {
            respond(StatusCode::NOT_FOUND, "not_found", "Resource not found")
        }
        tonic::Code::InvalidArgument => {
            respond(StatusCode::BAD_REQUEST, "bad_request", "Backend rejected the request")
        }
        tonic::Code::DeadlineExceeded => respond(
            StatusCode::GATEWAY_TIMEOUT,
            "backend_timeout",
            "Backend request timed out",
        ),
        _ => respond(
            StatusCode::BAD_GATEWAY,
            "backend_error",
            "Backend request failed",
        ),
    }
}

fn respond(status: StatusCode, error: &str, message: &str) -> Response {
    let body = ErrorResponse::new(error, message, status.as_u16());
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_have_distinct_codes() {
        let codes: std::collections::HashSet<_> = [
            AuthError::MissingCredential,
            AuthError::MalformedCredential,
            AuthError::InvalidSignature,
            AuthError::ExpiredCredential,
        ]
        .iter()
        .map(|e| e.code())
        .collect();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn rate_limit_rejection_is_429() {
        let response = GatewayError::RateLimitExceeded { limit: 60, reset_secs: 12 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn store_failure_is_503_not_admission() {
        let response = GatewayError::RateLimitUnavailable("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn backend_not_found_maps_to_404() {
        let response =
            GatewayError::Backend(tonic::Status::not_found("order xyz")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_internal_maps_to_502() {
        let response =
            GatewayError::Backend(tonic::Status::internal("db exploded")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
