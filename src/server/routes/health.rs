//! Health check endpoint

use crate::server::routes::ApiResponse;
use actix_web::HttpResponse;
use std::borrow::Cow;

#[derive(Debug, serde::Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
}

/// Basic health check used by load balancers and uptime monitors
pub async fn health_check() -> HttpResponse {
    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    HttpResponse::Ok().json(ApiResponse::success(health_status))
}
