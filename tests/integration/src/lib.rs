//! Integration test utilities for RESTHub
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API on the in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
