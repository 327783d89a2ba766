//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Resource owner known to the test server
pub const TEST_USER: &str = "test";
pub const TEST_PASSWORD: &str = "t3st";
pub const TEST_USER_ID: &str = "123456";

/// Scopes the test server grants
pub const TEST_SCOPES: &[&str] = &["read", "write"];

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Hotel body, sent on create/update and read back from responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    pub country: String,
    pub price: i32,
}

impl HotelBody {
    pub fn new(name: &str, city: &str, country: &str, price: i32) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            address: String::new(),
            city: city.to_string(),
            state: String::new(),
            zip: String::new(),
            country: country.to_string(),
            price,
        }
    }

    pub fn unique() -> Self {
        Self::new(&format!("Test Hotel {}", unique_suffix()), "Atlanta", "USA", 120)
    }
}

/// Role body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl RoleBody {
    pub fn unique() -> Self {
        Self {
            id: None,
            name: format!("role-{}", unique_suffix()),
        }
    }
}

/// Page envelope
#[derive(Debug, Deserialize)]
pub struct PageBody<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// Token endpoint form
#[derive(Debug, Default, Serialize)]
pub struct TokenForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl TokenForm {
    /// Password grant for the test user
    pub fn password_grant(scope: &str) -> Self {
        Self {
            grant_type: Some("password".to_string()),
            username: Some(TEST_USER.to_string()),
            password: Some(TEST_PASSWORD.to_string()),
            scope: Some(scope.to_string()),
            ..Self::default()
        }
    }
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
pub struct TokenBody {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub scope: String,
}

/// Token details response
#[derive(Debug, Deserialize)]
pub struct TokenDetailsBody {
    pub user_id: String,
    pub scope: Vec<String>,
    pub created_on: String,
    pub life_time: i64,
    pub expires_at: String,
}

/// OAuth2 error body
#[derive(Debug, Deserialize)]
pub struct ProtocolErrorBody {
    pub error: String,
    pub error_description: Option<String>,
}
