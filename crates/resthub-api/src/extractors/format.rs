//! Accept header extractor

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};

use crate::response::ResponseFormat;

#[async_trait]
impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(ResponseFormat::from_accept)
            .unwrap_or_default())
    }
}
