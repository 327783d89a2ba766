//! Hotel database model

use sqlx::FromRow;

/// Database model for hotels table
#[derive(Debug, Clone, FromRow)]
pub struct HotelModel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub price: i32,
}

impl HotelModel {
    /// Column list matching the field order above
    pub const COLUMNS: &'static str = "id, name, address, city, state, zip, country, price";
}
