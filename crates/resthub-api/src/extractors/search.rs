//! Search parameters extractor
//!
//! Reads `q`, `page` and `size` from the query string. Numbers arrive as text
//! so that a malformed value is answered like any other bad query.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use tracing::debug;

use crate::response::ApiError;

/// Default page number
pub const DEFAULT_PAGE: i64 = 0;
/// Default page size
pub const DEFAULT_SIZE: i64 = 5;

/// Raw search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParamsRaw {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

/// Parsed search parameters
///
/// `page` and `size` are only parsed here; range checks belong to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub q: String,
    pub page: i64,
    pub size: i64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

fn parse_number(name: &str, value: Option<&str>, default: i64) -> Result<i64, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            debug!(name, raw, "Rejected non-numeric paging parameter");
            ApiError::BadQuery
        }),
    }
}

impl TryFrom<SearchParamsRaw> for SearchParams {
    type Error = ApiError;

    fn try_from(raw: SearchParamsRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            page: parse_number("page", raw.page.as_deref(), DEFAULT_PAGE)?,
            size: parse_number("size", raw.size.as_deref(), DEFAULT_SIZE)?,
            q: raw.q.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<SearchParamsRaw>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadQuery)?;

        SearchParams::try_from(raw)
    }
}
