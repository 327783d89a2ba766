//! OAuth2 protocol errors
//!
//! These are client-facing failures of the token endpoint (bad credentials,
//! unknown scope, ...) as opposed to programming or infrastructure errors.

use serde::Serialize;
use std::fmt;

/// Reason code of a protocol failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtocolErrorKind {
    InvalidRequest,
    InvalidClientId,
    InvalidClientCredentials,
    UnauthorizedClient,
    InvalidGrant,
    UnsupportedGrantType,
    InvalidScope,
    AccessDenied,
}

impl ProtocolErrorKind {
    /// Upper-case reason code
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidClientId => "INVALID_CLIENT_ID",
            Self::InvalidClientCredentials => "INVALID_CLIENT_CREDENTIALS",
            Self::UnauthorizedClient => "UNAUTHORIZED_CLIENT",
            Self::InvalidGrant => "INVALID_GRANT",
            Self::UnsupportedGrantType => "UNSUPPORTED_GRANT_TYPE",
            Self::InvalidScope => "INVALID_SCOPE",
            Self::AccessDenied => "ACCESS_DENIED",
        }
    }

    /// Lower-case code used in the `error` member of OAuth2 error bodies
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClientId => "invalid_client_id",
            Self::InvalidClientCredentials => "invalid_client_credentials",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidScope => "invalid_scope",
            Self::AccessDenied => "access_denied",
        }
    }

    /// Check if the failure concerns client or user authentication
    pub fn is_authentication_failure(self) -> bool {
        matches!(self, Self::InvalidClientId | Self::InvalidClientCredentials)
    }
}

impl fmt::Display for ProtocolErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Typed protocol failure with an enumerated reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    pub kind: ProtocolErrorKind,
    pub description: Option<String>,
}

impl ProtocolError {
    /// Create a protocol error without description
    pub fn new(kind: ProtocolErrorKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }

    /// Create a protocol error with a human readable description
    pub fn with_description(kind: ProtocolErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: Some(description.into()),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OAuth2 protocol error {}", self.kind)?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl From<ProtocolErrorKind> for ProtocolError {
    fn from(kind: ProtocolErrorKind) -> Self {
        Self::new(kind)
    }
}
