//! Hotel entity <-> model mapper

use resthub_core::entities::Hotel;
use resthub_core::value_objects::EntityId;

use crate::models::HotelModel;

/// Convert HotelModel to Hotel entity
impl From<HotelModel> for Hotel {
    fn from(model: HotelModel) -> Self {
        Hotel {
            id: Some(EntityId::new(model.id)),
            name: model.name,
            address: model.address,
            city: model.city,
            state: model.state,
            zip: model.zip,
            country: model.country,
            price: model.price,
        }
    }
}

/// Hotel columns bound by INSERT and UPDATE
pub struct HotelValues<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
    pub country: &'a str,
    pub price: i32,
}

impl<'a> HotelValues<'a> {
    pub fn new(hotel: &'a Hotel) -> Self {
        Self {
            name: &hotel.name,
            address: &hotel.address,
            city: &hotel.city,
            state: &hotel.state,
            zip: &hotel.zip,
            country: &hotel.country,
            price: hotel.price,
        }
    }
}
