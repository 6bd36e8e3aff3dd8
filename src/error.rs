//! Error types for the caching proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the request handler.
///
/// Every variant is converted into a client-visible HTTP status at the
/// handler boundary; no error propagates further or aborts the process.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Request used a method other than GET
    #[error("only GET requests are cached and proxied")]
    MethodNotAllowed,

    /// The origin request could not be constructed (malformed target URL)
    #[error("origin request error: {0}")]
    InvalidOriginRequest(String),

    /// Transport-level failure reaching the origin
    #[error("origin unreachable: {0}")]
    OriginUnreachable(String),

    /// Failure while reading the origin response body
    #[error("origin body read error: {0}")]
    OriginBodyRead(String),
}

// == Config Error Enum ==
/// Startup configuration errors, reported by the binary before serving.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Server port missing, unparsable, or zero
    #[error("SERVER_PORT is required and must be a nonzero port number")]
    MissingPort,

    /// Origin base URL missing or empty
    #[error("ORIGIN_URL is required")]
    MissingOrigin,
}

// == Error Response Body ==
/// JSON body returned for all error conditions.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::InvalidOriginRequest(_)
            | ProxyError::OriginUnreachable(_)
            | ProxyError::OriginBodyRead(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy handler.
pub type Result<T> = std::result::Result<T, ProxyError>;
