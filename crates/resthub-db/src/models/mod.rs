//! Database models - SQLx-compatible structs for PostgreSQL tables

mod hotel;
mod role;
mod token;

pub use hotel::HotelModel;
pub use role::RoleModel;
pub use token::TokenModel;
