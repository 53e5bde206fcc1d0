//! Payment resource

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Amount, ApiMode};
use crate::resource::Resource;

/// A payment made to the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Object type discriminator, `"payment"`
    #[serde(default)]
    pub resource: String,
    /// Payment id, `tr_`-prefixed
    pub id: String,
    /// Environment the payment was created in
    #[serde(default)]
    pub mode: Option<ApiMode>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Description shown to the payer
    pub description: String,
    /// Amount charged
    pub amount: Amount,
    /// Lifecycle status
    pub status: PaymentStatus,
    /// Payment method, when already chosen
    #[serde(default)]
    pub method: Option<String>,
    /// Profile the payment was created on
    #[serde(default)]
    pub profile_id: Option<String>,
}

/// Lifecycle status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Created, awaiting the payer
    Open,
    /// Canceled by the payer or the account
    Canceled,
    /// Submitted, awaiting confirmation
    Pending,
    /// Authorized but not yet captured
    Authorized,
    /// The payer never completed it in time
    Expired,
    /// Definitively failed
    Failed,
    /// Successfully completed
    Paid,
    /// Status introduced by a newer API version
    #[serde(other)]
    Unknown,
}

impl Resource for Payment {
    const COLLECTION_KEY: &'static str = "payments";
    const PATH: &'static str = "payments";
    const ID_PREFIX: Option<&'static str> = Some("tr_");
    const NAME: &'static str = "payment";
}
