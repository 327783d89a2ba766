//! # resthub-core
//!
//! Domain layer containing entities, paging, the search query language,
//! persistence and authentication ports, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod oauth;
pub mod paging;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Entity, Hotel, Role, Token};
pub use error::DomainError;
pub use oauth::{ProtocolError, ProtocolErrorKind};
pub use paging::{Page, PageRequest};
pub use query::{QueryError, SearchQuery, SearchTerm};
pub use traits::{AuthenticationService, GenericDao, Principal, RepoResult, TokenDao};
pub use value_objects::{EntityId, EntityIdParseError};
