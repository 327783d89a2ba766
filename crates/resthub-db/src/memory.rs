//! In-memory DAO used when no database is configured, and in tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use resthub_core::entities::{Entity, Token};
use resthub_core::error::DomainError;
use resthub_core::paging::{Page, PageRequest};
use resthub_core::query::SearchQuery;
use resthub_core::traits::{GenericDao, RepoResult, TokenDao};
use resthub_core::value_objects::EntityId;

struct Store<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

/// `GenericDao` over a map keyed by identifier
///
/// Identifiers start at 1 and are never reused. Unique keys reported by
/// [`Entity::unique_keys`] are checked under the write lock.
pub struct MemoryDao<T> {
    store: RwLock<Store<T>>,
}

impl<T: Entity> MemoryDao<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn check_unique(rows: &BTreeMap<i64, T>, entity: &T, own_id: Option<i64>) -> RepoResult<()> {
        let keys = entity.unique_keys();
        if keys.is_empty() {
            return Ok(());
        }

        for (id, other) in rows {
            if Some(*id) == own_id {
                continue;
            }
            let taken = other.unique_keys();
            for (field, value) in &keys {
                if taken
                    .iter()
                    .any(|(f, v)| (T::UNIQUE_KEYS_SHARED || f == field) && v == value)
                {
                    return Err(DomainError::UniqueViolation {
                        kind: T::KIND,
                        field: *field,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<T: Entity> Default for MemoryDao<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> GenericDao<T> for MemoryDao<T> {
    #[instrument(skip(self), fields(kind = T::KIND))]
    async fn read_by_primary_key(&self, id: EntityId) -> RepoResult<Option<T>> {
        Ok(self.store.read().rows.get(&id.into_inner()).cloned())
    }

    #[instrument(skip_all, fields(kind = T::KIND))]
    async fn save(&self, entity: &T) -> RepoResult<T> {
        let mut store = self.store.write();

        match entity.id() {
            None => {
                Self::check_unique(&store.rows, entity, None)?;
                let id = store.next_id;
                store.next_id += 1;
                let saved = entity.clone().with_id(EntityId::new(id));
                store.rows.insert(id, saved.clone());
                Ok(saved)
            }
            Some(id) => {
                let key = id.into_inner();
                if !store.rows.contains_key(&key) {
                    return Err(DomainError::not_found(T::KIND, id));
                }
                Self::check_unique(&store.rows, entity, Some(key))?;
                store.rows.insert(key, entity.clone());
                Ok(entity.clone())
            }
        }
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    async fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.store
            .write()
            .rows
            .remove(&id.into_inner())
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    async fn find(&self, query: &SearchQuery, page: PageRequest) -> RepoResult<Page<T>> {
        let store = self.store.read();
        let matching: Vec<&T> = store
            .rows
            .values()
            .filter(|entity| query.matches(T::SEARCH_FIELDS, |field| entity.field_value(field)))
            .collect();

        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let content = matching
            .into_iter()
            .skip(offset)
            .take(page.size() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, page, total))
    }

    async fn count(&self) -> RepoResult<u64> {
        Ok(self.store.read().rows.len() as u64)
    }
}

/// Token entity specialization of the generic store
pub type MemoryTokenDao = MemoryDao<Token>;

#[async_trait]
impl TokenDao for MemoryDao<Token> {
    #[instrument(skip_all)]
    async fn find_by_access_token(&self, access_token: &str) -> RepoResult<Option<Token>> {
        Ok(self
            .store
            .read()
            .rows
            .values()
            .find(|token| token.access_token == access_token)
            .cloned())
    }

    fn as_generic(&self) -> &dyn GenericDao<Token> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resthub_core::entities::{Hotel, Role};

    fn page(page: i64, size: i64) -> PageRequest {
        PageRequest::new(page, size).unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let dao = MemoryDao::<Role>::new();
        let first = dao.save(&Role::new("admin")).await.unwrap();
        let second = dao.save(&Role::new("user")).await.unwrap();

        assert_eq!(first.id, Some(EntityId::new(1)));
        assert_eq!(second.id, Some(EntityId::new(2)));
        assert_eq!(dao.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let dao = MemoryDao::<Role>::new();
        let ghost = Role::new("ghost").with_id(EntityId::new(42));
        let err = dao.save(&ghost).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_read() {
        let dao = MemoryDao::<Role>::new();
        let role = dao.save(&Role::new("admin")).await.unwrap();
        let id = role.id.unwrap();

        dao.delete(id).await.unwrap();
        assert!(dao.read_by_primary_key(id).await.unwrap().is_none());
        assert!(dao.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let dao = MemoryDao::<Role>::new();
        let role = dao.save(&Role::new("a")).await.unwrap();
        dao.delete(role.id.unwrap()).await.unwrap();
        let next = dao.save(&Role::new("b")).await.unwrap();
        assert_eq!(next.id, Some(EntityId::new(2)));
    }

    #[tokio::test]
    async fn test_find_pages_in_id_order() {
        let dao = MemoryDao::<Hotel>::new();
        for name in ["a", "b", "c", "d", "e"] {
            dao.save(&Hotel::new(name, "Paris", "France")).await.unwrap();
        }

        let result = dao.find(&SearchQuery::all(), page(1, 2)).await.unwrap();
        let names: Vec<_> = result.content.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["c", "d"]);
        assert_eq!(result.total_elements, 5);
        assert_eq!(result.total_pages(), 3);

        let past_end = dao.find(&SearchQuery::all(), page(9, 2)).await.unwrap();
        assert!(past_end.is_empty());
        assert_eq!(past_end.total_elements, 5);
    }

    #[tokio::test]
    async fn test_find_filters() {
        let dao = MemoryDao::<Hotel>::new();
        dao.save(&Hotel::new("Conrad Miami", "Miami", "USA"))
            .await
            .unwrap();
        dao.save(&Hotel::new("Ritz", "Paris", "France")).await.unwrap();

        let query = SearchQuery::parse("city:miami", Hotel::SEARCH_FIELDS).unwrap();
        let result = dao.find(&query, page(0, 5)).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.content[0].name, "Conrad Miami");
    }

    #[tokio::test]
    async fn test_token_uniqueness() {
        let dao = MemoryTokenDao::new();
        let token = Token::new("a".into(), "r".into(), "u".into(), 60, vec![]);
        dao.save(&token).await.unwrap();

        let clash = Token::new("a".into(), "other".into(), "u".into(), 60, vec![]);
        let err = dao.save(&clash).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::UniqueViolation {
                field: "access_token",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_token_strings_unique_across_columns() {
        let dao = MemoryTokenDao::new();
        dao.save(&Token::new("a".into(), "r".into(), "u".into(), 60, vec![]))
            .await
            .unwrap();

        // Refresh token reusing another token's access token
        let clash = Token::new("b".into(), "a".into(), "u".into(), 60, vec![]);
        let err = dao.save(&clash).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::UniqueViolation {
                field: "refresh_token",
                ..
            }
        ));

        // Access token reusing another token's refresh token
        let clash = Token::new("r".into(), "c".into(), "u".into(), 60, vec![]);
        let err = dao.save(&clash).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::UniqueViolation {
                field: "access_token",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_role_names_may_repeat() {
        let dao = MemoryDao::<Role>::new();
        dao.save(&Role::new("admin")).await.unwrap();
        assert!(dao.save(&Role::new("admin")).await.is_ok());
    }

    #[tokio::test]
    async fn test_token_update_keeps_own_keys() {
        let dao = MemoryTokenDao::new();
        let mut token = dao
            .save(&Token::new("a".into(), "r".into(), "u".into(), 60, vec![]))
            .await
            .unwrap();
        token.permissions.push("read".to_string());

        let updated = dao.save(&token).await.unwrap();
        assert!(updated.has_permission("read"));
    }

    #[tokio::test]
    async fn test_find_by_access_token() {
        let dao = MemoryTokenDao::new();
        let saved = dao
            .save(&Token::new("a".into(), "r".into(), "u".into(), 60, vec![]))
            .await
            .unwrap();

        assert_eq!(dao.find_by_access_token("a").await.unwrap(), Some(saved));
        assert!(dao.find_by_access_token("r").await.unwrap().is_none());
    }
}
