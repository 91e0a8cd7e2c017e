//! # Payment Strategy Trait
//!
//! Seam between the HTTP handlers and the payment provider.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        PaymentStrategy (trait)           │
//! │  ├── create_checkout()                   │
//! │  └── provider_name()                     │
//! └──────────────────────────────────────────┘
//!                     ▲
//!          ┌──────────┴──────────┐
//!  ┌───────┴────────┐   ┌────────┴───────┐
//!  │ StripeCheckout │   │  test doubles  │
//!  │    Strategy    │   │                │
//!  └────────────────┘   └────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{CheckoutSession, Order};
use async_trait::async_trait;
use std::sync::Arc;

/// Creates hosted checkout sessions with a payment provider.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Create a checkout session for `order`.
    ///
    /// # Arguments
    /// * `order` - The order to check out
    /// * `success_url` - URL to redirect after successful payment
    /// * `cancel_url` - URL to redirect if customer cancels
    async fn create_checkout(
        &self,
        order: &Order,
        success_url: &str,
        cancel_url: &str,
    ) -> PaymentResult<CheckoutSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;
