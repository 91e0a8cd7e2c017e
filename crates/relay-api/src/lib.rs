//! # relay-api
//!
//! HTTP API layer for the contact & checkout relay.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/send-email` | Relay a contact-form message |
//! | POST | `/create-checkout-session` | Donation checkout session |
//! | POST | `/create-checkout-session-formation` | Training checkout session |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
