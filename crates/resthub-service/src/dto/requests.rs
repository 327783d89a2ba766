//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use resthub_core::entities::{Hotel, Role};
use resthub_core::value_objects::EntityId;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Resource Requests
// ============================================================================

/// Hotel body for create and update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HotelRequest {
    /// Must be absent on create; must match the path on update
    #[serde(default)]
    pub id: Option<EntityId>,

    #[validate(length(min = 1, max = 255, message = "Hotel name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Address must be at most 255 characters"))]
    pub address: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "State must be at most 100 characters"))]
    pub state: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "Zip must be at most 20 characters"))]
    pub zip: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i32,
}

impl From<HotelRequest> for Hotel {
    fn from(request: HotelRequest) -> Self {
        Hotel {
            id: request.id,
            name: request.name,
            address: request.address,
            city: request.city,
            state: request.state,
            zip: request.zip,
            country: request.country,
            price: request.price,
        }
    }
}

/// Role body for create and update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoleRequest {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[validate(length(min = 1, max = 100, message = "Role name must be 1-100 characters"))]
    pub name: String,
}

impl From<RoleRequest> for Role {
    fn from(request: RoleRequest) -> Self {
        Role {
            id: request.id,
            name: request.name,
        }
    }
}

// ============================================================================
// OAuth2 Requests
// ============================================================================

/// Token endpoint form (`application/x-www-form-urlencoded`)
///
/// Every field is optional on the wire so that missing parameters surface as
/// OAuth2 protocol errors rather than extractor rejections.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TokenRequest {
    pub grant_type: Option<String>,

    #[validate(length(max = 256, message = "username must be at most 256 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 1024, message = "password must be at most 1024 characters"))]
    pub password: Option<String>,

    /// Space-separated scope list
    #[validate(length(max = 2048, message = "scope must be at most 2048 characters"))]
    pub scope: Option<String>,

    pub client_id: Option<String>,

    pub client_secret: Option<String>,
}

impl TokenRequest {
    /// Requested scopes; absent or blank means none
    pub fn scopes(&self) -> Vec<String> {
        self.scope
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect()
    }
}
