//! # Routes
//!
//! Axum router configuration for the relay API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
///   - POST /send-email                          - Relay a contact-form message
///   - POST /create-checkout-session             - Donation checkout (caller amount)
///   - POST /create-checkout-session-formation   - Training checkout (fixed price)
///   - GET  /health, GET /                       - Health check
pub fn create_router(state: AppState) -> Router {
    // Browsers call the relay from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route("/send-email", post(handlers::send_email))
        .route("/create-checkout-session", post(handlers::create_checkout_session))
        .route(
            "/create-checkout-session-formation",
            post(handlers::create_checkout_session_formation),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
