//! # Checkout Offers
//!
//! The two things the relay sells: a free-amount donation and the fixed-price
//! training pack. Each offer knows its product and its redirect pages.

use crate::error::{PaymentError, PaymentResult};
use crate::order::Order;
use crate::product::{Currency, Price, Product};
use serde_json::Value;

/// Public site hosting the success/cancel pages
pub const SITE_URL: &str = "https://alkyai.fr";

/// Message returned when a donation amount is rejected
pub const INVALID_AMOUNT_MESSAGE: &str = "amount must be a valid number";

/// Training pack price in cents.
///
/// The product is advertised at 90 €, but the live value has always been
/// 100 cents. Kept as-is.
pub const TRAINING_PRICE_CENTS: i64 = 100;

/// Redirect URLs handed to the provider for one checkout flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl CheckoutUrls {
    pub fn new(success_url: impl Into<String>, cancel_url: impl Into<String>) -> Self {
        Self {
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    /// Build URLs for two pages of the public site
    pub fn on_site(success_page: &str, cancel_page: &str) -> Self {
        Self::new(
            format!("{}/{}", SITE_URL, success_page),
            format!("{}/{}", SITE_URL, cancel_page),
        )
    }
}

/// A validated donation amount, in currency units (not cents)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationAmount(f64);

impl DonationAmount {
    /// Validate the `amount` field of a donation request.
    ///
    /// Accepts a JSON number or a numeric string. Anything missing,
    /// non-numeric, non-finite or `<= 0` is rejected.
    pub fn parse(value: Option<&Value>) -> PaymentResult<Self> {
        let amount = match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match amount {
            Some(a) if a.is_finite() && a > 0.0 => Ok(Self(a)),
            _ => Err(PaymentError::InvalidAmount {
                message: INVALID_AMOUNT_MESSAGE.to_string(),
            }),
        }
    }

    /// Amount in cents, rounded half away from zero
    pub fn minor_units(&self) -> i64 {
        Currency::EUR.to_smallest_unit(self.0)
    }
}

/// A product plus the redirect pages of its checkout flow
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    /// Short label used in logs
    pub label: &'static str,
    pub product: Product,
    pub urls: CheckoutUrls,
}

impl Offer {
    /// Donation of a caller-chosen amount
    pub fn donation(amount: DonationAmount) -> Self {
        Self {
            label: "donation",
            product: Product::one_time(
                "Don pour AlkyBin",
                "Soutenez le projet AlkyBin",
                Price::from_cents(amount.minor_units(), Currency::EUR),
            ),
            urls: CheckoutUrls::on_site("success.html", "cancel.html"),
        }
    }

    /// Fixed-price training pack
    pub fn training() -> Self {
        Self {
            label: "training",
            product: Product::one_time(
                "Formation IA/Business/OFM",
                "Formation complète : Format PDF",
                Price::from_cents(TRAINING_PRICE_CENTS, Currency::EUR),
            ),
            urls: CheckoutUrls::on_site("success-formation.html", "cancel-formation.html"),
        }
    }

    /// Single-item, quantity-one order for this offer
    pub fn to_order(&self) -> Order {
        let mut order = Order::new(self.product.price.currency);
        order.add_product(&self.product, 1);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_donation_amount_accepts_positive_numbers() {
        let amount = DonationAmount::parse(Some(&json!(12.5))).unwrap();
        assert_eq!(amount.minor_units(), 1250);

        let amount = DonationAmount::parse(Some(&json!(5))).unwrap();
        assert_eq!(amount.minor_units(), 500);

        let amount = DonationAmount::parse(Some(&json!(" 20.5 "))).unwrap();
        assert_eq!(amount.minor_units(), 2050);
    }

    #[test]
    fn test_donation_amount_rejects_invalid_values() {
        let cases = vec![
            (Some(json!(0)), "zero"),
            (Some(json!(-5)), "negative"),
            (Some(json!("abc")), "non-numeric string"),
            (Some(json!("")), "empty string"),
            (Some(json!("Infinity")), "infinite string"),
            (Some(json!(null)), "null"),
            (Some(json!(true)), "boolean"),
            (Some(json!([10])), "array"),
            (Some(json!("0x10")), "hex string"),
            (Some(json!({ "value": 10 })), "object"),
            (None, "missing"),
        ];

        for (value, case) in cases {
            let err = DonationAmount::parse(value.as_ref()).unwrap_err();
            assert_eq!(err.detail(), INVALID_AMOUNT_MESSAGE, "case: {}", case);
        }
    }

    #[test]
    fn test_donation_offer() {
        let offer = Offer::donation(DonationAmount::parse(Some(&json!(12.5))).unwrap());

        assert_eq!(offer.product.name, "Don pour AlkyBin");
        assert_eq!(offer.product.price.amount, 1250);
        assert_eq!(offer.urls.success_url, "https://alkyai.fr/success.html");
        assert_eq!(offer.urls.cancel_url, "https://alkyai.fr/cancel.html");
    }

    #[test]
    fn test_training_offer_uses_literal_price() {
        let offer = Offer::training();

        assert_eq!(offer.product.name, "Formation IA/Business/OFM");
        assert_eq!(offer.product.description, "Formation complète : Format PDF");
        assert_eq!(offer.product.price.amount, 100);
        assert_eq!(offer.urls.success_url, "https://alkyai.fr/success-formation.html");
        assert_eq!(offer.urls.cancel_url, "https://alkyai.fr/cancel-formation.html");
    }

    #[test]
    fn test_offer_to_order() {
        let order = Offer::training().to_order();

        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].quantity, 1);
        assert_eq!(order.currency, Currency::EUR);
        assert_eq!(order.total().amount, TRAINING_PRICE_CENTS);
    }
}
