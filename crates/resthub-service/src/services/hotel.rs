//! Hotel service
//!
//! CRUD and search over hotels.

use resthub_core::entities::Hotel;
use resthub_core::traits::GenericDao;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::generic::GenericService;

/// Hotel service
pub struct HotelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HotelService<'a> {
    /// Create a new HotelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }
}

impl GenericService<Hotel> for HotelService<'_> {
    fn dao(&self) -> &dyn GenericDao<Hotel> {
        self.ctx.hotel_dao()
    }

    fn validate(&self, hotel: &Hotel) -> ServiceResult<()> {
        if hotel.name.trim().is_empty() {
            return Err(ServiceError::validation("Hotel name must not be empty"));
        }
        if hotel.price < 0 {
            return Err(ServiceError::validation("Hotel price must not be negative"));
        }
        Ok(())
    }
}
