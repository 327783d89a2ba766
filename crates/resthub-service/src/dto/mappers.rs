//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain types to response DTOs.

use resthub_core::entities::Token;
use resthub_core::paging::Page;

use super::responses::{PageResponse, TokenInformationResponse, TokenResponse};

// ============================================================================
// Paging Mappers
// ============================================================================

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            content: page.content,
            number: page.number,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
        }
    }
}

// ============================================================================
// Token Mappers
// ============================================================================

impl From<&Token> for TokenResponse {
    fn from(token: &Token) -> Self {
        Self {
            access_token: token.access_token.clone(),
            token_type: "bearer",
            expires_in: token.life_time,
            refresh_token: token.refresh_token.clone(),
            scope: token.permissions.join(" "),
        }
    }
}

impl From<Token> for TokenResponse {
    fn from(token: Token) -> Self {
        Self::from(&token)
    }
}

impl From<&Token> for TokenInformationResponse {
    fn from(token: &Token) -> Self {
        Self {
            user_id: token.user_id.clone(),
            scope: token.permissions.clone(),
            created_on: token.created_on,
            life_time: token.life_time,
            expires_at: token.expires_at(),
        }
    }
}
