//! Route definitions
//!
//! Resource routes are mounted per entity kind, next to the OAuth2 endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use resthub_core::{Hotel, Role};

use crate::handlers::{health, oauth, resources, resources::Resource};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Hotel>())
        .merge(resource_routes::<Role>())
        .merge(oauth_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// CRUD and search routes for one entity kind
fn resource_routes<R: Resource>() -> Router<AppState> {
    let base = format!("/{}", R::KIND);

    Router::new()
        .route(&base, get(resources::list::<R>).post(resources::create::<R>))
        .route(&format!("{base}/search"), get(resources::search::<R>))
        .route(
            &format!("{base}/:id"),
            get(resources::get::<R>)
                .put(resources::update::<R>)
                .delete(resources::delete::<R>),
        )
}

/// OAuth2 authorization server routes
fn oauth_routes() -> Router<AppState> {
    Router::new()
        .route("/oauth/token", post(oauth::token))
        .route("/oauth/tokenDetails", get(oauth::token_details))
}
