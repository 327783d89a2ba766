//! Service context - dependency container for services
//!
//! Holds the DAOs, the authentication collaborator and the OAuth2 settings
//! needed by services.

use std::sync::Arc;

use resthub_common::OAuth2Config;
use resthub_core::entities::{Hotel, Role};
use resthub_core::traits::{AuthenticationService, GenericDao, TokenDao};
use resthub_db::{MemoryDao, MemoryTokenDao, PgHotelDao, PgPool, PgRoleDao, PgTokenDao};

use super::error::{ServiceError, ServiceResult};

/// Which persistence backend the DAOs talk to
#[derive(Clone)]
pub enum StoreBackend {
    Postgres(PgPool),
    Memory,
}

impl StoreBackend {
    /// Short name for logs and health output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory => "memory",
        }
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    backend: StoreBackend,

    // DAOs
    hotel_dao: Arc<dyn GenericDao<Hotel>>,
    role_dao: Arc<dyn GenericDao<Role>>,
    token_dao: Arc<dyn TokenDao>,

    // Collaborators
    authenticator: Arc<dyn AuthenticationService>,
    oauth2: Arc<OAuth2Config>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        backend: StoreBackend,
        hotel_dao: Arc<dyn GenericDao<Hotel>>,
        role_dao: Arc<dyn GenericDao<Role>>,
        token_dao: Arc<dyn TokenDao>,
        authenticator: Arc<dyn AuthenticationService>,
        oauth2: OAuth2Config,
    ) -> Self {
        Self {
            backend,
            hotel_dao,
            role_dao,
            token_dao,
            authenticator,
            oauth2: Arc::new(oauth2),
        }
    }

    /// Wire the PostgreSQL DAOs over one pool
    pub fn postgres(
        pool: PgPool,
        authenticator: Arc<dyn AuthenticationService>,
        oauth2: OAuth2Config,
    ) -> Self {
        Self::new(
            StoreBackend::Postgres(pool.clone()),
            Arc::new(PgHotelDao::new(pool.clone())),
            Arc::new(PgRoleDao::new(pool.clone())),
            Arc::new(PgTokenDao::new(pool)),
            authenticator,
            oauth2,
        )
    }

    /// Wire fresh in-memory DAOs
    pub fn in_memory(authenticator: Arc<dyn AuthenticationService>, oauth2: OAuth2Config) -> Self {
        Self::new(
            StoreBackend::Memory,
            Arc::new(MemoryDao::<Hotel>::new()),
            Arc::new(MemoryDao::<Role>::new()),
            Arc::new(MemoryTokenDao::new()),
            authenticator,
            oauth2,
        )
    }

    // === Store ===

    /// Get the persistence backend
    pub fn backend(&self) -> &StoreBackend {
        &self.backend
    }

    /// Check that the store can serve requests
    pub async fn check_store(&self) -> ServiceResult<()> {
        match &self.backend {
            StoreBackend::Postgres(pool) => resthub_db::ping(pool)
                .await
                .map_err(|e| ServiceError::internal(e.to_string())),
            StoreBackend::Memory => Ok(()),
        }
    }

    // === DAOs ===

    /// Get the hotel DAO
    pub fn hotel_dao(&self) -> &dyn GenericDao<Hotel> {
        self.hotel_dao.as_ref()
    }

    /// Get the role DAO
    pub fn role_dao(&self) -> &dyn GenericDao<Role> {
        self.role_dao.as_ref()
    }

    /// Get the token DAO
    pub fn token_dao(&self) -> &dyn TokenDao {
        self.token_dao.as_ref()
    }

    // === Collaborators ===

    /// Get the authentication collaborator
    pub fn authenticator(&self) -> &dyn AuthenticationService {
        self.authenticator.as_ref()
    }

    /// Get the OAuth2 settings
    pub fn oauth2(&self) -> &OAuth2Config {
        &self.oauth2
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &self.backend.name())
            .field("daos", &"...")
            .field("oauth2_scopes", &self.oauth2.scopes)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    backend: StoreBackend,
    hotel_dao: Option<Arc<dyn GenericDao<Hotel>>>,
    role_dao: Option<Arc<dyn GenericDao<Role>>>,
    token_dao: Option<Arc<dyn TokenDao>>,
    authenticator: Option<Arc<dyn AuthenticationService>>,
    oauth2: OAuth2Config,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            backend: StoreBackend::Memory,
            hotel_dao: None,
            role_dao: None,
            token_dao: None,
            authenticator: None,
            oauth2: OAuth2Config::default(),
        }
    }

    pub fn backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn hotel_dao(mut self, dao: Arc<dyn GenericDao<Hotel>>) -> Self {
        self.hotel_dao = Some(dao);
        self
    }

    pub fn role_dao(mut self, dao: Arc<dyn GenericDao<Role>>) -> Self {
        self.role_dao = Some(dao);
        self
    }

    pub fn token_dao(mut self, dao: Arc<dyn TokenDao>) -> Self {
        self.token_dao = Some(dao);
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<dyn AuthenticationService>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn oauth2(mut self, oauth2: OAuth2Config) -> Self {
        self.oauth2 = oauth2;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.backend,
            self.hotel_dao
                .ok_or_else(|| ServiceError::validation("hotel_dao is required"))?,
            self.role_dao
                .ok_or_else(|| ServiceError::validation("role_dao is required"))?,
            self.token_dao
                .ok_or_else(|| ServiceError::validation("token_dao is required"))?,
            self.authenticator
                .ok_or_else(|| ServiceError::validation("authenticator is required"))?,
            self.oauth2,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
