//! Balance resource

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Amount, ApiMode};
use crate::endpoint::CollectionEndpoint;
use crate::error::Result;
use crate::query::Filters;
use crate::resource::Resource;

/// Fixed id of the account's primary balance
const PRIMARY_ID: &str = "primary";

/// A currency balance held on the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Object type discriminator, `"balance"`
    #[serde(default)]
    pub resource: String,
    /// Balance id, `bal_`-prefixed
    pub id: String,
    /// Environment the balance lives in
    #[serde(default)]
    pub mode: Option<ApiMode>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Currency of all amounts on this balance
    pub currency: String,
    /// Availability status
    pub status: BalanceStatus,
    /// Settlement frequency, e.g. `"daily"`
    #[serde(default)]
    pub transfer_frequency: Option<String>,
    /// Funds ready for settlement
    pub available_amount: Amount,
    /// Funds not yet available
    pub pending_amount: Amount,
}

/// Availability status of a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// Balance is operational
    Available,
    /// Balance exists but cannot be used
    Inactive,
    /// Status introduced by a newer API version
    #[serde(other)]
    Unknown,
}

impl Resource for Balance {
    const COLLECTION_KEY: &'static str = "balances";
    const PATH: &'static str = "balances";
    const ID_PREFIX: Option<&'static str> = Some("bal_");
    const NAME: &'static str = "balance";
}

impl CollectionEndpoint<Balance> {
    /// Fetch the account's primary balance.
    ///
    /// `primary` is a fixed literal id, never caller input, so the `bal_`
    /// prefix check does not apply to it.
    pub async fn primary(&self) -> Result<Balance> {
        self.read_raw(PRIMARY_ID, &Filters::new()).await
    }

    /// Fetch the primary balance with extra query parameters.
    pub async fn primary_with(&self, params: &Filters) -> Result<Balance> {
        self.read_raw(PRIMARY_ID, params).await
    }
}
