//! Chat endpoint
//!
//! The gateway rate-limits and screens inbound conversations, then
//! forwards the body to the configured upstream completion endpoint.
//! Rate limiting runs first so screening work is never spent on callers
//! already over budget.

use crate::core::guardrails::{self, ChatMessage};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// POST /api/chat
pub async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse> {
    let caller = caller_id(&req);

    let decision = state.rate_limiter.check_detailed(&caller).await;
    if !decision.allowed {
        debug!(caller = %caller, "chat request rate limited");
        let mut response = HttpResponse::TooManyRequests();
        if let Some(retry) = decision.retry_after_secs {
            response.insert_header(("Retry-After", retry.to_string()));
        }
        return Ok(response
            .json(ApiResponse::error("Too many requests. Please slow down.".into())));
    }

    if let Err(violation) = guardrails::validate_messages(&body.messages) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error(violation.to_string())));
    }

    let upstream = state
        .config
        .chat
        .upstream_url
        .as_deref()
        .ok_or_else(|| GatewayError::ServiceUnavailable("chat upstream is not configured".into()))?;

    let upstream_response = state.http.post(upstream).json(&*body).send().await?;
    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let payload: serde_json::Value = upstream_response.json().await?;

    Ok(HttpResponse::build(status).json(payload))
}

/// Caller identity for rate limiting: first hop of `x-forwarded-for`,
/// else the peer address, else `"unknown"`.
fn caller_id(req: &HttpRequest) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_caller_id_prefers_forwarded_header() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.9, 10.0.0.1"))
            .to_http_request();
        assert_eq!(caller_id(&req), "203.0.113.9");
    }

    #[test]
    fn test_caller_id_falls_back_to_unknown() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(caller_id(&req), "unknown");
    }

    #[test]
    fn test_caller_id_ignores_empty_header() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", ""))
            .to_http_request();
        assert_eq!(caller_id(&req), "unknown");
    }
}
