//! # relay-stripe
//!
//! Stripe payment strategy for the contact & checkout relay.
//!
//! `StripeCheckoutStrategy` creates hosted Checkout Sessions with dynamic
//! line items. Session completion is left to Stripe and the redirect pages;
//! no webhook is consumed here.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_stripe::StripeCheckoutStrategy;
//! use relay_core::{Offer, PaymentStrategy};
//!
//! let strategy = StripeCheckoutStrategy::from_env()?;
//!
//! let offer = Offer::training();
//! let session = strategy
//!     .create_checkout(&offer.to_order(), &offer.urls.success_url, &offer.urls.cancel_url)
//!     .await?;
//!
//! // Hand session.session_id to the browser for redirectToCheckout
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckoutStrategy;
pub use config::StripeConfig;
