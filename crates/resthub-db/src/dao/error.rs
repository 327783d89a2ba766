//! Error handling utilities for DAOs

use resthub_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
///
/// `on_unique` receives the name of the violated constraint when the driver reports one.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Pick the column a `<table>_<column>_key` constraint covers
pub fn constraint_column(constraint: Option<&str>, columns: &[&'static str]) -> &'static str {
    constraint
        .and_then(|name| columns.iter().find(|col| name.contains(*col)).copied())
        .unwrap_or("key")
}
