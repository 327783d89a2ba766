//! Token entity <-> model mapper

use chrono::{DateTime, Utc};
use resthub_core::entities::Token;
use resthub_core::value_objects::EntityId;

use crate::models::TokenModel;

/// Convert TokenModel to Token entity
impl From<TokenModel> for Token {
    fn from(model: TokenModel) -> Self {
        Token {
            id: Some(EntityId::new(model.id)),
            access_token: model.access_token,
            refresh_token: model.refresh_token,
            user_id: model.user_id,
            created_on: model.created_on,
            life_time: model.life_time,
            permissions: model.permissions,
        }
    }
}

/// Token columns bound by INSERT and UPDATE
pub struct TokenValues<'a> {
    pub access_token: &'a str,
    pub refresh_token: &'a str,
    pub user_id: &'a str,
    pub created_on: DateTime<Utc>,
    pub life_time: i64,
    pub permissions: &'a [String],
}

impl<'a> TokenValues<'a> {
    pub fn new(token: &'a Token) -> Self {
        Self {
            access_token: &token.access_token,
            refresh_token: &token.refresh_token,
            user_id: &token.user_id,
            created_on: token.created_on,
            life_time: token.life_time,
            permissions: &token.permissions,
        }
    }
}
