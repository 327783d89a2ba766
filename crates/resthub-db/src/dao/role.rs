//! PostgreSQL implementation of the Role DAO

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use resthub_core::entities::{Entity, Role};
use resthub_core::error::DomainError;
use resthub_core::paging::{Page, PageRequest};
use resthub_core::query::SearchQuery;
use resthub_core::traits::{GenericDao, RepoResult};
use resthub_core::value_objects::EntityId;

use crate::mappers::RoleValues;
use crate::models::RoleModel;

use super::error::map_db_error;
use super::search::find_page;

/// PostgreSQL implementation of `GenericDao<Role>`
#[derive(Clone)]
pub struct PgRoleDao {
    pool: PgPool,
}

impl PgRoleDao {
    /// Create a new PgRoleDao
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenericDao<Role> for PgRoleDao {
    #[instrument(skip(self))]
    async fn read_by_primary_key(&self, id: EntityId) -> RepoResult<Option<Role>> {
        let result = sqlx::query_as::<_, RoleModel>("SELECT id, name FROM roles WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Role::from))
    }

    #[instrument(skip(self))]
    async fn save(&self, role: &Role) -> RepoResult<Role> {
        let values = RoleValues::new(role);

        match role.id {
            None => {
                let model = sqlx::query_as::<_, RoleModel>(
                    "INSERT INTO roles (name) VALUES ($1) RETURNING id, name",
                )
                .bind(values.name)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

                Ok(Role::from(model))
            }
            Some(id) => {
                let model = sqlx::query_as::<_, RoleModel>(
                    "UPDATE roles SET name = $2 WHERE id = $1 RETURNING id, name",
                )
                .bind(id.into_inner())
                .bind(values.name)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

                model
                    .map(Role::from)
                    .ok_or_else(|| DomainError::not_found(Role::KIND, id))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(Role::KIND, id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, query: &SearchQuery, page: PageRequest) -> RepoResult<Page<Role>> {
        find_page::<RoleModel, Role>(
            &self.pool,
            "roles",
            RoleModel::COLUMNS,
            Role::SEARCH_FIELDS,
            query,
            page,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM roles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.max(0) as u64)
    }
}
