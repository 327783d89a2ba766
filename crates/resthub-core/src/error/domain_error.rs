//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::query::QueryError;
use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: &'static str, id: EntityId },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0} has no identifier")]
    MissingIdentifier(&'static str),

    #[error("{kind} already has identifier {id}")]
    IdentifierAlreadyAssigned { kind: &'static str, id: EntityId },

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("{kind} with this {field} already exists")]
    UniqueViolation {
        kind: &'static str,
        field: &'static str,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create a "not found" error for an entity kind
    pub fn not_found(kind: &'static str, id: EntityId) -> Self {
        Self::EntityNotFound { kind, id }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EntityNotFound { .. } => "NOT_FOUND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingIdentifier(_) => "MISSING_IDENTIFIER",
            Self::IdentifierAlreadyAssigned { .. } => "IDENTIFIER_ALREADY_ASSIGNED",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidPageRequest(_) => "INVALID_PAGE_REQUEST",
            Self::UniqueViolation { .. } => "UNIQUE_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingIdentifier(_)
                | Self::IdentifierAlreadyAssigned { .. }
                | Self::InvalidQuery(_)
                | Self::InvalidPageRequest(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}
