//! Data access traits (ports) - define the interface for persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or the in-memory store).

use async_trait::async_trait;

use crate::entities::{Entity, Token};
use crate::error::DomainError;
use crate::paging::{Page, PageRequest};
use crate::query::SearchQuery;
use crate::value_objects::EntityId;

/// Result type for persistence operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Generic DAO
// ============================================================================

#[async_trait]
pub trait GenericDao<T: Entity>: Send + Sync {
    /// Find an entity by its primary key
    async fn read_by_primary_key(&self, id: EntityId) -> RepoResult<Option<T>>;

    /// Persist an entity
    ///
    /// Without identifier the entity is inserted and receives one; with an
    /// identifier the matching record is replaced (`EntityNotFound` when
    /// there is none). Returns the stored copy.
    async fn save(&self, entity: &T) -> RepoResult<T>;

    /// Remove the entity with the given primary key
    ///
    /// Returns `EntityNotFound` when nothing was removed.
    async fn delete(&self, id: EntityId) -> RepoResult<()>;

    /// Page through the entities matching a query, ordered by identifier
    async fn find(&self, query: &SearchQuery, page: PageRequest) -> RepoResult<Page<T>>;

    /// Count all stored entities
    async fn count(&self) -> RepoResult<u64>;
}

// ============================================================================
// Token DAO
// ============================================================================

#[async_trait]
pub trait TokenDao: GenericDao<Token> {
    /// Find a token by its access-token string
    async fn find_by_access_token(&self, access_token: &str) -> RepoResult<Option<Token>>;

    /// View this DAO through its generic interface
    fn as_generic(&self) -> &dyn GenericDao<Token>;
}
