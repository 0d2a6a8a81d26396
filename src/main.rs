//! studio-gateway - marketing site backend
//!
//! Rate-limited chat proxy, signed admin sessions, and page-view analytics.

use std::process::ExitCode;
use studio_gateway::{server, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Honor a local .env file before reading configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> studio_gateway::Result<()> {
    let config = Config::from_env()?;
    server::run_server(config).await
}
