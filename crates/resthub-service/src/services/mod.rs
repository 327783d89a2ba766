//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! validation and orchestration of domain operations.

pub mod authorization;
pub mod context;
pub mod error;
pub mod generic;
pub mod hotel;
pub mod role;

// Re-export all services for convenience
pub use authorization::AuthorizationService;
pub use context::{ServiceContext, ServiceContextBuilder, StoreBackend};
pub use error::{ServiceError, ServiceResult};
pub use generic::GenericService;
pub use hotel::HotelService;
pub use role::RoleService;
