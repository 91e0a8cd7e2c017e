//! # Stripe Checkout Sessions
//!
//! Implementation of the Stripe Checkout Sessions API.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use relay_core::{CheckoutSession, Order, PaymentError, PaymentResult, PaymentStrategy};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "stripe";

/// Payment methods offered on the hosted page
const PAYMENT_METHOD_TYPES: &[&str] = &["card"];

/// Stripe Checkout Session strategy
///
/// Uses Stripe's hosted checkout page; the caller's browser is redirected
/// there with the returned session id.
pub struct StripeCheckoutStrategy {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckoutStrategy {
    /// Create a new Stripe checkout strategy
    pub fn new(config: StripeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(StripeConfig::from_env())
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }
}

/// Form fields for `POST /v1/checkout/sessions`
pub fn build_form_params(order: &Order, success_url: &str, cancel_url: &str) -> Vec<(String, String)> {
    let mut form_params: Vec<(String, String)> = vec![
        ("mode".to_string(), order.mode.as_str().to_string()),
        ("success_url".to_string(), success_url.to_string()),
        ("cancel_url".to_string(), cancel_url.to_string()),
    ];

    for (i, method) in PAYMENT_METHOD_TYPES.iter().enumerate() {
        form_params.push((format!("payment_method_types[{}]", i), method.to_string()));
    }

    for (i, item) in order.line_items.iter().enumerate() {
        let prefix = format!("line_items[{}]", i);
        form_params.push((
            format!("{}[price_data][currency]", prefix),
            item.unit_price.currency.as_str().to_string(),
        ));
        form_params.push((
            format!("{}[price_data][unit_amount]", prefix),
            item.unit_price.amount.to_string(),
        ));
        form_params.push((
            format!("{}[price_data][product_data][name]", prefix),
            item.name.clone(),
        ));
        if let Some(ref desc) = item.description {
            form_params.push((
                format!("{}[price_data][product_data][description]", prefix),
                desc.clone(),
            ));
        }
        form_params.push((format!("{}[quantity]", prefix), item.quantity.to_string()));
    }

    form_params.push(("metadata[order_id]".to_string(), order.id.clone()));
    form_params
}

#[async_trait]
impl PaymentStrategy for StripeCheckoutStrategy {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn create_checkout(
        &self,
        order: &Order,
        success_url: &str,
        cancel_url: &str,
    ) -> PaymentResult<CheckoutSession> {
        if order.is_empty() {
            return Err(PaymentError::InvalidRequest("Order has no items".to_string()));
        }

        let auth = self.config.auth_header().ok_or_else(|| {
            PaymentError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        let form_params = build_form_params(order, success_url, cancel_url);

        debug!(
            "Creating Stripe checkout session: {} items, mode={}",
            order.line_items.len(),
            order.mode.as_str()
        );

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", auth)
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(PaymentError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session_response: StripeCheckoutSessionResponse = serde_json::from_str(&body)
            .map_err(|e| {
                PaymentError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        let mut session = CheckoutSession::new(session_response.id, PROVIDER);
        session.checkout_url = session_response.url;
        session.expires_at = session_response
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0));

        info!(
            "Created Stripe checkout session: id={}, url={:?}, expires_at={:?}",
            session.session_id, session.checkout_url, session.expires_at
        );

        Ok(session)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
