//! Built-in resource bindings
//!
//! Reference bindings for a payments-style HAL API: shared value objects
//! plus the [`Balance`] and [`Payment`] resources. Integrations against
//! other APIs define their own [`Resource`](crate::resource::Resource)
//! types and get the same pagination surface through
//! [`ApiClient::endpoint`](crate::client::ApiClient::endpoint).

mod balance;
mod payment;

pub use balance::{Balance, BalanceStatus};
pub use payment::{Payment, PaymentStatus};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monetary amount as served by the API: decimal string plus currency code.
///
/// The value stays a string; the API owns the decimal representation and
/// converting it to a binary float would corrupt it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal value, e.g. `"905.25"`
    pub value: String,
    /// ISO 4217 currency code, e.g. `"EUR"`
    pub currency: String,
}

impl Amount {
    /// Create an amount
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// Environment an object was created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    /// Production data
    Live,
    /// Sandbox data
    Test,
}
