//! Domain entities - core business objects

mod entity;
mod hotel;
mod role;
mod token;

pub use entity::Entity;
pub use hotel::Hotel;
pub use role::Role;
pub use token::Token;
