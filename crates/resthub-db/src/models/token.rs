//! Token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tokens table
#[derive(Debug, Clone, FromRow)]
pub struct TokenModel {
    pub id: i64,
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub created_on: DateTime<Utc>,
    /// Seconds
    pub life_time: i64,
    pub permissions: Vec<String>,
}

impl TokenModel {
    pub const COLUMNS: &'static str =
        "id, access_token, refresh_token, user_id, created_on, life_time, permissions";
}
