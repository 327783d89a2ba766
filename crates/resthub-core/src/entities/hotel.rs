//! Hotel entity - the booking sample's searchable resource

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::value_objects::EntityId;

/// Hotel entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
    /// Nightly price in whole currency units
    #[serde(default)]
    pub price: i32,
}

impl Hotel {
    /// Create a new, not yet persisted Hotel
    pub fn new(name: impl Into<String>, city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: String::new(),
            city: city.into(),
            state: String::new(),
            zip: String::new(),
            country: country.into(),
            price: 0,
        }
    }

    /// Set the street address
    pub fn with_address(mut self, address: impl Into<String>, zip: impl Into<String>) -> Self {
        self.address = address.into();
        self.zip = zip.into();
        self
    }

    /// Set the nightly price
    pub fn with_price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }
}

impl Entity for Hotel {
    const KIND: &'static str = "hotel";
    const SEARCH_FIELDS: &'static [&'static str] =
        &["name", "address", "city", "state", "zip", "country"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "name" => &self.name,
            "address" => &self.address,
            "city" => &self.city,
            "state" => &self.state,
            "zip" => &self.zip,
            "country" => &self.country,
            _ => return None,
        };
        Some(value.clone())
    }
}
