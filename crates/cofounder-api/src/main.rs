//! Co-founder matching API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p cofounder-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use cofounder_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {}", e);
            }
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!("Starting co-founder matching API server...");
    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    cofounder_api::run(config).await?;

    Ok(())
}
