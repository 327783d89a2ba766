//! # resthub-db
//!
//! Persistence layer implementing the DAO traits of `resthub-core`.
//!
//! ## Overview
//!
//! Two stores are provided:
//!
//! - PostgreSQL via SQLx: connection pool, schema bootstrap, row models,
//!   entity ↔ model mappers and one DAO per table
//! - [`MemoryDao`], a lock-protected map used when no database is configured
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resthub_db::pool::{create_pool, ensure_schema, DatabaseConfig};
//! use resthub_db::PgHotelDao;
//! use resthub_core::traits::GenericDao;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let hotels = PgHotelDao::new(pool);
//!
//!     // Use the DAO...
//!     Ok(())
//! }
//! ```

pub mod dao;
pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;

// Re-export commonly used types
pub use dao::{PgHotelDao, PgRoleDao, PgTokenDao};
pub use memory::{MemoryDao, MemoryTokenDao};
pub use pool::{create_pool, ensure_schema, ping, DatabaseConfig, PgPool};
