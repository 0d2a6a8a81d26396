//! HTTP server assembly and startup

use crate::config::Config;
use crate::server::middleware::PageViewTracking;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{
    middleware::{DefaultHeaders, Logger},
    web, App, HttpServer,
};
use std::sync::Arc;
use tracing::info;

/// Build the shared state and run the HTTP server until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    let bind_addr = config.server.address();
    let state = AppState::new(config)?;

    // background eviction of idle rate-limit buckets
    Arc::clone(&state.rate_limiter).start_cleanup_task();

    let data = web::Data::new(state);

    info!("Starting HTTP server on {}", bind_addr);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(PageViewTracking)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "studio-gateway")))
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)
    .map_err(|e| GatewayError::Config(format!("failed to bind {}: {}", bind_addr, e)))?
    .run();

    info!("HTTP server listening on {}", bind_addr);

    server
        .await
        .map_err(|e| GatewayError::Internal(format!("server error: {}", e)))?;

    info!("HTTP server stopped");
    Ok(())
}
