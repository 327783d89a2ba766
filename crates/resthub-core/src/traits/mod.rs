//! Ports - interfaces the domain needs from the infrastructure

mod authentication;
mod dao;

pub use authentication::{AuthenticationService, Principal};
pub use dao::{GenericDao, RepoResult, TokenDao};
