//! Generic CRUD service
//!
//! Every entity service gets create/update/delete/find on top of its DAO and
//! only supplies `dao()` plus, where needed, a `validate` hook.

use async_trait::async_trait;
use resthub_core::entities::Entity;
use resthub_core::error::DomainError;
use resthub_core::paging::{Page, PageRequest};
use resthub_core::query::SearchQuery;
use resthub_core::traits::GenericDao;
use resthub_core::value_objects::EntityId;
use tracing::{debug, info};

use super::error::ServiceResult;

#[async_trait]
pub trait GenericService<T: Entity>: Send + Sync {
    /// DAO the provided operations delegate to
    fn dao(&self) -> &dyn GenericDao<T>;

    /// Entity rules checked by `create` and `update`
    fn validate(&self, _entity: &T) -> ServiceResult<()> {
        Ok(())
    }

    /// Persist a new entity and return it with its assigned identifier
    async fn create(&self, entity: T) -> ServiceResult<T> {
        if let Some(id) = entity.id() {
            return Err(DomainError::IdentifierAlreadyAssigned { kind: T::KIND, id }.into());
        }
        self.validate(&entity)?;

        let saved = self.dao().save(&entity).await?;
        info!(kind = T::KIND, id = ?saved.id(), "Entity created");
        Ok(saved)
    }

    /// Replace the stored entity carrying the same identifier
    async fn update(&self, entity: T) -> ServiceResult<T> {
        let id = entity.id().ok_or(DomainError::MissingIdentifier(T::KIND))?;
        self.validate(&entity)?;

        let saved = self.dao().save(&entity).await?;
        info!(kind = T::KIND, id = %id, "Entity updated");
        Ok(saved)
    }

    /// Remove a persisted entity
    async fn delete(&self, entity: &T) -> ServiceResult<()> {
        let id = entity.id().ok_or(DomainError::MissingIdentifier(T::KIND))?;
        self.delete_by_id(id).await
    }

    /// Remove the entity with the given identifier
    async fn delete_by_id(&self, id: EntityId) -> ServiceResult<()> {
        self.dao().delete(id).await?;
        info!(kind = T::KIND, id = %id, "Entity deleted");
        Ok(())
    }

    async fn find_by_id(&self, id: EntityId) -> ServiceResult<Option<T>> {
        Ok(self.dao().read_by_primary_key(id).await?)
    }

    /// Search entities
    ///
    /// Returns `Ok(None)` when the query or the paging window is invalid.
    async fn find(&self, query: &str, page: i64, size: i64) -> ServiceResult<Option<Page<T>>> {
        let parsed = match SearchQuery::parse(query, T::SEARCH_FIELDS) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(kind = T::KIND, query, error = %e, "Rejected search query");
                return Ok(None);
            }
        };
        let request = match PageRequest::new(page, size) {
            Ok(request) => request,
            Err(e) => {
                debug!(kind = T::KIND, page, size, error = %e, "Rejected page request");
                return Ok(None);
            }
        };

        Ok(Some(self.dao().find(&parsed, request).await?))
    }

    /// Count stored entities
    async fn count(&self) -> ServiceResult<u64> {
        Ok(self.dao().count().await?)
    }
}
