//! Admin authentication and analytics dashboard endpoints
//!
//! The dashboard is protected by the stateless session scheme: login
//! exchanges the shared secret for a signed cookie, stats verifies the
//! cookie on every request, logout clears the cookie client-side.

use crate::core::analytics::StatsQuery;
use crate::core::session::SESSION_COOKIE_NAME;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    password: Option<String>,
}

/// POST /api/admin/login
///
/// Authenticates with the shared secret and sets the session cookie.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let password = match body.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error("Password is required".into())));
        }
    };

    if !state.sessions.verify_credential(password) {
        debug!("admin login rejected");
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error("Invalid password".into())));
    }

    let token = state.sessions.issue_session()?;
    info!("admin session issued");

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, state.config.server.production))
        .json(ApiResponse::success(())))
}

/// POST /api/admin/logout
///
/// Clears the session cookie. Revocation itself is a no-op: the token
/// stays cryptographically valid until it expires.
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
        state.sessions.revoke_session(cookie.value());
    }

    let mut removal = Cookie::build(SESSION_COOKIE_NAME, "").path("/").finish();
    removal.make_removal();

    HttpResponse::Ok()
        .cookie(removal)
        .json(ApiResponse::success(()))
}

/// GET /api/admin/stats?days=&path=
///
/// Aggregated page-view statistics; requires a valid session cookie.
pub async fn stats(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<StatsQuery>,
) -> HttpResponse {
    if !is_authenticated(&state, &req) {
        return HttpResponse::Unauthorized().json(ApiResponse::error("Unauthorized".into()));
    }

    let stats = state.analytics.page_view_stats(&query).await;
    HttpResponse::Ok().json(ApiResponse::success(stats))
}

fn is_authenticated(state: &AppState, req: &HttpRequest) -> bool {
    req.cookie(SESSION_COOKIE_NAME)
        .map(|cookie| state.sessions.verify_session(cookie.value()))
        .unwrap_or(false)
}

/// Session cookie: HttpOnly, SameSite=Strict, Secure in production,
/// lifetime matching the token's 7-day expiry.
fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME, token)
        .http_only(true)
        .secure(production)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::days(7))
        .path("/")
        .finish()
}
