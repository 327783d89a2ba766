//! Token entity - an OAuth2 bearer token issued by the authorization service

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::value_objects::EntityId;

/// Token entity
///
/// `created_on` is set once when the token is minted, truncated to the
/// microsecond precision stores keep. `life_time` is recorded in seconds but
/// nothing in this crate enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub created_on: DateTime<Utc>,
    pub life_time: i64,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Token {
    /// Create a new, not yet persisted Token
    pub fn new(
        access_token: String,
        refresh_token: String,
        user_id: String,
        life_time: i64,
        permissions: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            access_token,
            refresh_token,
            user_id,
            created_on: Utc::now().trunc_subsecs(6),
            life_time,
            permissions,
        }
    }

    /// Point in time at which the token stops being valid
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_on + Duration::seconds(self.life_time)
    }

    /// Check if the token lifetime has elapsed at `now`
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Seconds left before expiry at `now` (never negative)
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at() - now).num_seconds().max(0)
    }

    /// Check if a permission was granted
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

impl Entity for Token {
    const KIND: &'static str = "token";
    const SEARCH_FIELDS: &'static [&'static str] = &["user_id"];
    const UNIQUE_KEYS_SHARED: bool = true;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    fn field_value(&self, field: &str) -> Option<String> {
        (field == "user_id").then(|| self.user_id.clone())
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![
            ("access_token", self.access_token.clone()),
            ("refresh_token", self.refresh_token.clone()),
        ]
    }
}
