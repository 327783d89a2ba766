//! Response types and error handling for API endpoints
//!
//! Provides unified error handling, content negotiation and response wrappers.

mod negotiated;

pub use negotiated::{Negotiated, ResponseFormat};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use resthub_common::AppError;
use resthub_core::{DomainError, ProtocolError, ProtocolErrorKind};
use resthub_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Plain-text body answered for rejected searches
pub const BAD_QUERY_BODY: &str = "Bad query.";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Protocol(#[from] ProtocolError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Search query or paging parameters could not be used
    #[error("Bad query.")]
    BadQuery,

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Unknown access token")]
    UnknownToken,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Service(e) => StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_validation() {
                    StatusCode::BAD_REQUEST
                } else if e.is_conflict() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Protocol(e) => {
                if e.kind.is_authentication_failure() {
                    StatusCode::UNAUTHORIZED
                } else {
                    StatusCode::BAD_REQUEST
                }
            }
            Self::Validation(_) | Self::BadQuery | Self::InvalidPath(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownToken => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Protocol(e) => e.kind.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadQuery => "BAD_QUERY",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::UnknownToken => "INVALID_GRANT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// OAuth2 failure carried by this error, rendered with the protocol body
    fn protocol_error(&self) -> Option<ProtocolError> {
        match self {
            Self::Protocol(e)
            | Self::Service(ServiceError::Protocol(e))
            | Self::Service(ServiceError::App(AppError::Protocol(e)))
            | Self::App(AppError::Protocol(e)) => Some(e.clone()),
            Self::UnknownToken => Some(ProtocolError::with_description(
                ProtocolErrorKind::InvalidGrant,
                "unknown access token",
            )),
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// OAuth2 error body (RFC 6749 section 5.2)
#[derive(Debug, Serialize)]
pub struct ProtocolErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl From<ProtocolError> for ProtocolErrorBody {
    fn from(e: ProtocolError) -> Self {
        Self {
            error: e.kind.wire_code(),
            error_description: e.description,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        if matches!(self, Self::BadQuery) {
            return (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                BAD_QUERY_BODY,
            )
                .into_response();
        }

        if let Some(protocol) = self.protocol_error() {
            return (
                status,
                [(header::CACHE_CONTROL, "no-store")],
                Json(ProtocolErrorBody::from(protocol)),
            )
                .into_response();
        }

        // Build details for validation errors
        let details = if let Self::Validation(errors) = &self {
            Some(serde_json::to_value(errors).unwrap_or_default())
        } else {
            None
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201)
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        if response.status().is_success() {
            *response.status_mut() = StatusCode::CREATED;
        }
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
