//! HTTP composition layer
//!
//! Wires the core components (rate limiter, session authenticator,
//! analytics, guardrails) into an actix-web application.

pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::run_server;
pub use state::AppState;
