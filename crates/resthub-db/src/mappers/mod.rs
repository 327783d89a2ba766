//! Entity to model mappers
//!
//! This module provides conversions between domain entities (resthub-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Values` structs: Borrow entity data for INSERT/UPDATE binds

mod hotel;
mod role;
mod token;

pub use hotel::HotelValues;
pub use role::RoleValues;
pub use token::TokenValues;
