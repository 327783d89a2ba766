//! Free-text search query language used by `find` operations

mod search_query;

pub use search_query::{QueryError, SearchQuery, SearchTerm};
