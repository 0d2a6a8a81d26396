//! Page view tracking middleware
//!
//! Records a page view for every ordinary GET of a site page. API calls,
//! health probes, asset requests, and localhost traffic are skipped, so
//! the counters only ever reflect visitor-facing pages. Recording happens
//! on a spawned task; a slow or failing store never delays the response.

use crate::core::analytics::{detect_bot, PageView};
use crate::server::state::AppState;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, Method};
use actix_web::web;
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// Page view tracking middleware for Actix-web
pub struct PageViewTracking;

impl<S, B> Transform<S, ServiceRequest> for PageViewTracking
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = PageViewTrackingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PageViewTrackingService { service }))
    }
}

/// Service implementation for page view tracking middleware
pub struct PageViewTrackingService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for PageViewTrackingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(view) = page_view_from_request(&req) {
            if let Some(state) = req.app_data::<web::Data<AppState>>() {
                let analytics = state.analytics.clone();
                tokio::spawn(async move {
                    analytics.track_page_view(&view).await;
                });
            }
        }

        Box::pin(self.service.call(req))
    }
}

/// Builds a [`PageView`] for a trackable request, or `None` when the
/// request should not be counted.
fn page_view_from_request(req: &ServiceRequest) -> Option<PageView> {
    if req.method() != Method::GET {
        return None;
    }

    let path = req.path();
    if path.starts_with("/api") || path == "/health" || path.contains('.') {
        return None;
    }

    let host = header_str(req, header::HOST.as_str()).unwrap_or("");
    if host.contains("localhost") || host.contains("127.0.0.1") {
        return None;
    }

    let user_agent = header_str(req, header::USER_AGENT.as_str()).unwrap_or("");
    let referrer = header_str(req, header::REFERER.as_str())
        .filter(|r| is_external_referrer(r, host))
        .map(str::to_string);

    Some(PageView {
        path: path.to_string(),
        country: header_str(req, "x-vercel-ip-country")
            .unwrap_or("unknown")
            .to_string(),
        referrer,
        bot: detect_bot(user_agent).map(str::to_string),
        ..Default::default()
    })
}

fn header_str<'a>(req: &'a ServiceRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// A referrer counts only when it points at a different site. Self-referrals
/// from in-site navigation would otherwise dominate the referrer counters.
fn is_external_referrer(referrer: &str, host: &str) -> bool {
    match Url::parse(referrer) {
        Ok(url) => match url.host_str() {
            Some(ref_host) => normalize_host(ref_host) != normalize_host(host),
            None => false,
        },
        Err(_) => false,
    }
}

fn normalize_host(host: &str) -> &str {
    let host = host.split(':').next().unwrap_or(host);
    host.strip_prefix("www.").unwrap_or(host)
}
