//! # relay-core
//!
//! Core types and traits for the contact & checkout relay.
//!
//! This crate provides:
//! - `PaymentStrategy` trait for the checkout provider
//! - `Mailer` trait for the contact-form mail transport
//! - `Offer`, `Product` and `Price` describing what is sold
//! - `Order`, `LineItem` and `CheckoutSession` for the checkout flow
//! - `PaymentError` and `MailError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_core::{DonationAmount, Offer, PaymentStrategy};
//!
//! let amount = DonationAmount::parse(body.get("amount"))?;
//! let offer = Offer::donation(amount);
//! let session = strategy
//!     .create_checkout(&offer.to_order(), &offer.urls.success_url, &offer.urls.cancel_url)
//!     .await?;
//! ```

pub mod contact;
pub mod error;
pub mod offer;
pub mod order;
pub mod product;
pub mod strategy;

// Re-exports for convenience
pub use contact::{
    BoxedMailer, ContactMessage, Mailer, OutboundEmail, CONTACT_CONFIRMATION, CONTACT_SUBJECT,
    DEFAULT_CONTACT_RECIPIENT,
};
pub use error::{MailError, MailResult, PaymentError, PaymentResult};
pub use offer::{CheckoutUrls, DonationAmount, Offer, INVALID_AMOUNT_MESSAGE, TRAINING_PRICE_CENTS};
pub use order::{CheckoutMode, CheckoutSession, LineItem, Order};
pub use product::{Currency, Price, Product};
pub use strategy::{BoxedPaymentStrategy, PaymentStrategy};
