//! PostgreSQL implementation of the Hotel DAO

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use resthub_core::entities::{Entity, Hotel};
use resthub_core::error::DomainError;
use resthub_core::paging::{Page, PageRequest};
use resthub_core::query::SearchQuery;
use resthub_core::traits::{GenericDao, RepoResult};
use resthub_core::value_objects::EntityId;

use crate::mappers::HotelValues;
use crate::models::HotelModel;

use super::error::map_db_error;
use super::search::find_page;

/// PostgreSQL implementation of `GenericDao<Hotel>`
#[derive(Clone)]
pub struct PgHotelDao {
    pool: PgPool,
}

impl PgHotelDao {
    /// Create a new PgHotelDao
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenericDao<Hotel> for PgHotelDao {
    #[instrument(skip(self))]
    async fn read_by_primary_key(&self, id: EntityId) -> RepoResult<Option<Hotel>> {
        let result = sqlx::query_as::<_, HotelModel>(
            r#"
            SELECT id, name, address, city, state, zip, country, price
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Hotel::from))
    }

    #[instrument(skip(self, hotel), fields(id = ?hotel.id))]
    async fn save(&self, hotel: &Hotel) -> RepoResult<Hotel> {
        let values = HotelValues::new(hotel);

        let Some(id) = hotel.id else {
            let model = sqlx::query_as::<_, HotelModel>(
                r#"
                INSERT INTO hotels (name, address, city, state, zip, country, price)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, name, address, city, state, zip, country, price
                "#,
            )
            .bind(values.name)
            .bind(values.address)
            .bind(values.city)
            .bind(values.state)
            .bind(values.zip)
            .bind(values.country)
            .bind(values.price)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return Ok(Hotel::from(model));
        };

        let model = sqlx::query_as::<_, HotelModel>(
            r#"
            UPDATE hotels
            SET name = $2, address = $3, city = $4, state = $5, zip = $6, country = $7, price = $8
            WHERE id = $1
            RETURNING id, name, address, city, state, zip, country, price
            "#,
        )
        .bind(id.into_inner())
        .bind(values.name)
        .bind(values.address)
        .bind(values.city)
        .bind(values.state)
        .bind(values.zip)
        .bind(values.country)
        .bind(values.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Hotel::from)
            .ok_or_else(|| DomainError::not_found(Hotel::KIND, id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(Hotel::KIND, id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, query: &SearchQuery, page: PageRequest) -> RepoResult<Page<Hotel>> {
        find_page::<HotelModel, Hotel>(
            &self.pool,
            "hotels",
            HotelModel::COLUMNS,
            Hotel::SEARCH_FIELDS,
            query,
            page,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hotels")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.max(0) as u64)
    }
}
