//! # Product Types
//!
//! Currency, price and product types used to describe what a checkout sells.

/// Checkout currency. The relay only charges in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    EUR,
}

impl Currency {
    /// Lowercase ISO 4217 code, as the provider expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::EUR => "eur",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
        }
    }

    /// Minor units per major unit
    fn minor_per_major(&self) -> f64 {
        match self {
            Currency::EUR => 100.0,
        }
    }

    /// Convert a decimal amount to minor units (cents).
    ///
    /// Rounds half away from zero, so `12.345` becomes `1235`.
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        (amount * self.minor_per_major()).round() as i64
    }
}

/// An amount in minor units together with its currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub amount: i64,
    pub currency: Currency,
}

impl Price {
    pub fn from_cents(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Human-readable amount for logs, e.g. `€12.50`
    pub fn display(&self) -> String {
        let major = self.amount as f64 / self.currency.minor_per_major();
        format!("{}{:.2}", self.currency.symbol(), major)
    }
}

/// A product sold through a checkout session
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Name shown on the hosted checkout page
    pub name: String,
    pub description: String,
    pub price: Price,
}

impl Product {
    /// One-time purchase product
    pub fn one_time(name: impl Into<String>, description: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}
