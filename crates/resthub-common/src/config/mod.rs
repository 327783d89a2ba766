//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, OAuth2Config,
    RateLimitConfig, ServerConfig, UserCredential, MIN_TOKEN_LENGTH,
};
