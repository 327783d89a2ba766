//! Authentication utilities

mod authenticator;
mod password;

pub use authenticator::StaticAuthenticationService;
pub use password::{check_hash_format, hash_password, verify_password};
