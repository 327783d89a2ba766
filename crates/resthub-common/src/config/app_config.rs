//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    /// PostgreSQL settings; `None` selects the in-memory store
    pub database: Option<DatabaseConfig>,
    pub oauth2: OAuth2Config,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// A user known to the OAuth2 authorization server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserCredential {
    pub user_name: String,
    pub user_id: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

impl UserCredential {
    /// Parse one `user_name:user_id:phc_hash` entry
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` when a part is missing or empty
    pub fn parse(entry: &str) -> Result<Self, ConfigError> {
        let mut parts = entry.trim().splitn(3, ':');
        let (Some(user_name), Some(user_id), Some(password_hash)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(ConfigError::InvalidValue(
                "OAUTH2_USERS",
                format!("expected user_name:user_id:hash, got '{entry}'"),
            ));
        };

        if user_name.is_empty() || user_id.is_empty() || password_hash.is_empty() {
            return Err(ConfigError::InvalidValue(
                "OAUTH2_USERS",
                format!("empty field in entry for '{user_name}'"),
            ));
        }

        Ok(Self {
            user_name: user_name.to_string(),
            user_id: user_id.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Parse a `;`-separated list of entries
    ///
    /// # Errors
    /// Returns the first entry error
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, ConfigError> {
        raw.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }
}

/// OAuth2 authorization server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OAuth2Config {
    /// Lifetime recorded on issued tokens, in seconds
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime: i64,
    /// Random bytes per token string
    #[serde(default = "default_token_length")]
    pub token_length: usize,
    /// Scopes clients may request
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub users: Vec<UserCredential>,
}

impl Default for OAuth2Config {
    fn default() -> Self {
        Self {
            token_lifetime: default_token_lifetime(),
            token_length: default_token_length(),
            scopes: Vec::new(),
            users: Vec::new(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Minimum accepted `OAUTH2_TOKEN_LENGTH`
pub const MIN_TOKEN_LENGTH: usize = 16;

// Default value functions
fn default_app_name() -> String {
    "resthub".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    1
}

fn default_token_lifetime() -> i64 {
    3600 // 1 hour
}

fn default_token_length() -> usize {
    32
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

fn list_var(name: &'static str) -> Vec<String> {
    env::var(name)
        .ok()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let token_length = parse_var("OAUTH2_TOKEN_LENGTH")?.unwrap_or_else(default_token_length);
        if token_length < MIN_TOKEN_LENGTH {
            return Err(ConfigError::InvalidValue(
                "OAUTH2_TOKEN_LENGTH",
                format!("{token_length} is below the minimum of {MIN_TOKEN_LENGTH}"),
            ));
        }

        let database = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Some(DatabaseConfig {
                url,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            }),
            _ => None,
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.unwrap_or_else(default_port),
            },
            database,
            oauth2: OAuth2Config {
                token_lifetime: parse_var("OAUTH2_TOKEN_LIFETIME")?
                    .unwrap_or_else(default_token_lifetime),
                token_length,
                scopes: list_var("OAUTH2_SCOPES"),
                users: env::var("OAUTH2_USERS")
                    .ok()
                    .map(|raw| UserCredential::parse_list(&raw))
                    .transpose()?
                    .unwrap_or_default(),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: list_var("CORS_ALLOWED_ORIGINS"),
            },
        })
    }

    /// Configuration for tests and local runs: memory store, ephemeral port
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::Development,
            },
            api: ServerConfig {
                host: default_host(),
                port: 0,
            },
            database: None,
            oauth2: OAuth2Config::default(),
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
