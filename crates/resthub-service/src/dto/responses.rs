//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize`; resource bodies are rendered as
//! JSON or XML depending on the request's `Accept` header.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of search results
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    /// Zero-based page number
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

// ============================================================================
// OAuth2 Response Types
// ============================================================================

/// Successful token endpoint response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: &'static str,
    /// Lifetime in seconds
    pub expires_in: i64,
    pub refresh_token: String,
    /// Granted scopes, space separated
    pub scope: String,
}

/// Token details endpoint response
#[derive(Debug, Clone, Serialize)]
pub struct TokenInformationResponse {
    pub user_id: String,
    pub scope: Vec<String>,
    pub created_on: DateTime<Utc>,
    /// Lifetime in seconds
    pub life_time: i64,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    /// Backend name ("postgres" or "memory")
    pub store: String,
    pub store_status: String,
}

impl ReadinessResponse {
    pub fn ready(store: &str, store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: store.to_string(),
                store_status: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
