//! RESTHub API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p resthub-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.
//! Without `DATABASE_URL` the server runs on the in-memory store.

use resthub_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing_with_config(&TracingConfig::for_environment(Environment::default()));
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        store = if config.database.is_some() { "postgres" } else { "memory" },
        "Configuration loaded"
    );

    if let Err(e) = resthub_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
