//! # Request Handlers
//!
//! Axum request handlers for the relay API.
//! Every failure on the three relay endpoints is answered with HTTP 500 and a
//! JSON body; no other error status is produced.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use relay_core::{ContactMessage, DonationAmount, Offer, PaymentError, CONTACT_CONFIRMATION};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Contact relay response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: Some(CONTACT_CONFIRMATION.to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Create checkout response. Only the session id leaves the service.
#[derive(Debug, Serialize)]
pub struct CreateCheckoutResponse {
    pub id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type CheckoutResult = Result<Json<CreateCheckoutResponse>, (StatusCode, Json<ErrorResponse>)>;

fn payment_error_to_response(err: &PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.detail())),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "checkout-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Relay a contact-form submission to the configured mailbox.
///
/// A body that is not JSON is handled as an empty form.
#[instrument(skip(state, body))]
pub async fn send_email(
    State(state): State<AppState>,
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let contact = match body {
        Ok(Json(contact)) => contact,
        Err(rejection) => {
            debug!("Unreadable contact body, using empty form: {}", rejection);
            ContactMessage::default()
        }
    };

    let email = contact.to_email(&state.config.contact_recipient);

    match state.mailer.send(&email).await {
        Ok(()) => {
            info!("Contact message relayed via {}", state.mailer.transport_name());
            (StatusCode::OK, Json(ContactResponse::sent()))
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse::failed(e.to_string())),
        ),
    }
}

/// Create a donation checkout session for the amount in the body
#[instrument(skip(state, body))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> CheckoutResult {
    let raw_amount = body.ok().and_then(|Json(v)| v.get("amount").cloned());

    let amount = DonationAmount::parse(raw_amount.as_ref()).map_err(|e| {
        warn!("Rejected donation amount {:?}: {}", raw_amount, e);
        payment_error_to_response(&e)
    })?;

    create_checkout_internal(&state, Offer::donation(amount)).await
}

/// Create a checkout session for the fixed-price training pack.
///
/// The request body is never read.
#[instrument(skip(state))]
pub async fn create_checkout_session_formation(State(state): State<AppState>) -> CheckoutResult {
    create_checkout_internal(&state, Offer::training()).await
}

/// Internal checkout creation (shared logic)
async fn create_checkout_internal(state: &AppState, offer: Offer) -> CheckoutResult {
    let order = offer.to_order();

    info!(
        "Creating checkout: offer={}, total={}, provider={}",
        offer.label,
        order.total().display(),
        state.payments.provider_name()
    );

    let session = state
        .payments
        .create_checkout(&order, &offer.urls.success_url, &offer.urls.cancel_url)
        .await
        .map_err(|e| {
            error!("Failed to create checkout session: {}", e);
            payment_error_to_response(&e)
        })?;

    info!("Created checkout session: {}", session.session_id);

    Ok(Json(CreateCheckoutResponse {
        id: session.session_id,
    }))
}
