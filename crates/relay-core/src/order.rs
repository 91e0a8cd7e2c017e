//! # Order Types
//!
//! Provider-neutral checkout request and the session returned for it.

use crate::product::{Currency, Price, Product};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One priced row of an order
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub description: Option<String>,
    pub unit_price: Price,
    pub quantity: u32,
}

impl LineItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            name: product.name.clone(),
            description: Some(product.description.clone()),
            unit_price: product.price.clone(),
            quantity,
        }
    }

    /// Amount for this row, in minor units
    pub fn subtotal(&self) -> i64 {
        self.unit_price.amount * i64::from(self.quantity)
    }
}

/// Checkout mode sent to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutMode {
    /// One-time payment
    #[default]
    Payment,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
        }
    }
}

/// An order to be checked out
#[derive(Debug, Clone)]
pub struct Order {
    /// Generated per request, forwarded as provider metadata
    pub id: String,
    pub line_items: Vec<LineItem>,
    pub currency: Currency,
    pub mode: CheckoutMode,
}

impl Order {
    /// Empty one-time-payment order with a fresh id
    pub fn new(currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            line_items: Vec::new(),
            currency,
            mode: CheckoutMode::Payment,
        }
    }

    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        self.line_items.push(LineItem::from_product(product, quantity));
    }

    pub fn total(&self) -> Price {
        let amount = self.line_items.iter().map(LineItem::subtotal).sum();
        Price::from_cents(amount, self.currency)
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// A checkout session created by a payment provider.
///
/// Only `session_id` is ever returned to API callers; the rest is logged.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub session_id: String,
    /// Provider name (e.g., "stripe")
    pub provider: String,
    /// Hosted checkout page URL
    pub checkout_url: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CheckoutSession {
    pub fn new(session_id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            provider: provider.into(),
            checkout_url: None,
            expires_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, cents: i64) -> Product {
        Product::one_time(name, "", Price::from_cents(cents, Currency::EUR))
    }

    #[test]
    fn test_line_item_subtotal() {
        let item = LineItem::from_product(&product("Test", 1000), 3);

        assert_eq!(item.subtotal(), 3000);
        assert_eq!(item.description.as_deref(), Some(""));
    }

    #[test]
    fn test_order_total() {
        let mut order = Order::new(Currency::EUR);
        order.add_product(&product("Product 1", 1000), 2);
        order.add_product(&product("Product 2", 2500), 1);

        assert_eq!(order.total(), Price::from_cents(4500, Currency::EUR));
        assert_eq!(order.mode, CheckoutMode::Payment);
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        let a = Order::new(Currency::EUR);
        let b = Order::new(Currency::EUR);

        assert_ne!(a.id, b.id);
        assert!(a.is_empty());
    }
}
