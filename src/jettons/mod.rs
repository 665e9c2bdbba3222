//! Jetton balance model and approval-aware classification.

mod classify;
#[cfg(test)]
mod tests;

pub use classify::{classify, ClassifiedBalances};

use serde::{Deserialize, Serialize};

use crate::address::TokenAddress;

/// Trust-list flag delivered with each jetton balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JettonVerification {
    Whitelisted,
    Blacklisted,
    Unverified,
}

/// Per-user decision recorded by the approval store.
///
/// `Unset` is a record the user has touched but not resolved; it is distinct
/// from having no record at all, and it keeps the jetton pending even when
/// the trust list would otherwise decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Approved,
    Declined,
    Unset,
}

/// Approval-store entry for a single jetton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub current: ApprovalStatus,
}

impl ApprovalRecord {
    pub fn new(current: ApprovalStatus) -> Self {
        ApprovalRecord { current }
    }
}

/// Snapshot of a single jetton balance as delivered by the balance feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JettonBalance {
    pub address: TokenAddress,
    /// String-encoded unsigned amount, exactly as received from the feed.
    pub balance: String,
    pub verification: JettonVerification,
}

impl JettonBalance {
    pub fn new(
        address: impl Into<TokenAddress>,
        balance: impl Into<String>,
        verification: JettonVerification,
    ) -> Self {
        JettonBalance {
            address: address.into(),
            balance: balance.into(),
            verification,
        }
    }

    /// Literal comparison against `"0"`, matching the feed contract. Variant
    /// spellings such as `"0.0"` are not treated as empty.
    pub fn is_zero(&self) -> bool {
        self.balance == "0"
    }
}
