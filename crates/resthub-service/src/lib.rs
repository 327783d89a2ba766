//! # resthub-service
//!
//! Application layer containing the generic CRUD service, the entity
//! services, the OAuth2 authorization service, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthorizationService, GenericService, HotelService, RoleService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StoreBackend,
};
