//! Axum extractors for request handling
//!
//! Custom extractors for search parameters, content negotiation, identifiers,
//! bearer tokens, and validation.

mod auth;
mod format;
mod path;
mod search;
mod validated;

pub use auth::BearerToken;
pub use path::IdPath;
pub use search::{SearchParams, SearchParamsRaw, DEFAULT_PAGE, DEFAULT_SIZE};
pub use validated::ValidatedJson;
