//! # checkout-relay
//!
//! Contact-form and checkout-session relay.
//!
//! ## Usage
//!
//! ```bash
//! export SMTP_HOST=smtp.example.com SMTP_PORT=465 SMTP_USER=... SMTP_PASS=...
//! export STRIPE_SECRET_KEY=sk_test_...
//! checkout-relay
//! ```

use relay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!(
        "Mail transport: {}, payment provider: {}",
        state.mailer.transport_name(),
        state.payments.provider_name()
    );

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/health", addr);
        info!("Contact: POST http://{}/send-email", addr);
        info!("Donation: POST http://{}/create-checkout-session", addr);
        info!("Training: POST http://{}/create-checkout-session-formation", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
