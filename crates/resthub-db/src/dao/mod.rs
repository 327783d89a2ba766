//! DAO implementations
//!
//! PostgreSQL implementations of the DAO traits defined in resthub-core.
//! Each DAO handles database operations for one entity table.

mod error;
mod hotel;
mod role;
mod search;
mod token;

pub use hotel::PgHotelDao;
pub use role::PgRoleDao;
pub use token::PgTokenDao;
