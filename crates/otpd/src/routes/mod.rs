//! HTTP route handlers for otpd.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod health;
mod otp;
mod pages;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // OTP flow
        .route("/", get(otp::serve_index))
        .route("/request", post(otp::handle_request))
        .route("/verify", post(otp::handle_verify))

        // Health & Status
        .route("/health", get(health::health_check))

        // Request/response logging
        .layer(TraceLayer::new_for_http())

        // Add shared state
        .with_state(state)
}
