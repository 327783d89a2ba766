//! PostgreSQL implementation of the Token DAO

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use resthub_core::entities::{Entity, Token};
use resthub_core::error::DomainError;
use resthub_core::paging::{Page, PageRequest};
use resthub_core::query::SearchQuery;
use resthub_core::traits::{GenericDao, RepoResult, TokenDao};
use resthub_core::value_objects::EntityId;

use crate::mappers::TokenValues;
use crate::models::TokenModel;

use super::error::{constraint_column, map_db_error, map_unique_violation};
use super::search::find_page;

const UNIQUE_COLUMNS: [&str; 2] = ["access_token", "refresh_token"];

fn duplicate_token(constraint: Option<&str>) -> DomainError {
    DomainError::UniqueViolation {
        kind: Token::KIND,
        field: constraint_column(constraint, &UNIQUE_COLUMNS),
    }
}

/// PostgreSQL implementation of `TokenDao`
#[derive(Clone)]
pub struct PgTokenDao {
    pool: PgPool,
}

impl PgTokenDao {
    /// Create a new PgTokenDao
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenericDao<Token> for PgTokenDao {
    #[instrument(skip(self))]
    async fn read_by_primary_key(&self, id: EntityId) -> RepoResult<Option<Token>> {
        let result = sqlx::query_as::<_, TokenModel>(
            r#"
            SELECT id, access_token, refresh_token, user_id, created_on, life_time, permissions
            FROM tokens
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Token::from))
    }

    #[instrument(skip(self, token), fields(id = ?token.id, user_id = %token.user_id))]
    async fn save(&self, token: &Token) -> RepoResult<Token> {
        let values = TokenValues::new(token);

        let Some(id) = token.id else {
            let model = sqlx::query_as::<_, TokenModel>(
                r#"
                INSERT INTO tokens (access_token, refresh_token, user_id, created_on, life_time, permissions)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, access_token, refresh_token, user_id, created_on, life_time, permissions
                "#,
            )
            .bind(values.access_token)
            .bind(values.refresh_token)
            .bind(values.user_id)
            .bind(values.created_on)
            .bind(values.life_time)
            .bind(values.permissions)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, duplicate_token))?;

            return Ok(Token::from(model));
        };

        // created_on is fixed at minting
        let model = sqlx::query_as::<_, TokenModel>(
            r#"
            UPDATE tokens
            SET access_token = $2, refresh_token = $3, user_id = $4, life_time = $5, permissions = $6
            WHERE id = $1
            RETURNING id, access_token, refresh_token, user_id, created_on, life_time, permissions
            "#,
        )
        .bind(id.into_inner())
        .bind(values.access_token)
        .bind(values.refresh_token)
        .bind(values.user_id)
        .bind(values.life_time)
        .bind(values.permissions)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_token))?;

        model
            .map(Token::from)
            .ok_or_else(|| DomainError::not_found(Token::KIND, id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM tokens WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(Token::KIND, id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, query: &SearchQuery, page: PageRequest) -> RepoResult<Page<Token>> {
        find_page::<TokenModel, Token>(
            &self.pool,
            "tokens",
            TokenModel::COLUMNS,
            Token::SEARCH_FIELDS,
            query,
            page,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tokens")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl TokenDao for PgTokenDao {
    #[instrument(skip_all)]
    async fn find_by_access_token(&self, access_token: &str) -> RepoResult<Option<Token>> {
        let result = sqlx::query_as::<_, TokenModel>(
            r#"
            SELECT id, access_token, refresh_token, user_id, created_on, life_time, permissions
            FROM tokens
            WHERE access_token = $1
            "#,
        )
        .bind(access_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Token::from))
    }

    fn as_generic(&self) -> &dyn GenericDao<Token> {
        self
    }
}
