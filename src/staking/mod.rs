//! Staking pool model, amount gating, and the pool-data store.

mod amount_gate;
mod store;

pub use amount_gate::{can_continue, StakeAmountGate};
pub use store::StakingStore;

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::address::TokenAddress;

/// Decimal places of the chain's nano denomination.
const NANO_SCALE: u32 = 9;

/// Convert a nano-denominated amount into whole-coin decimal units.
///
/// Total: amounts beyond the decimal range clamp to the representable maximum
/// instead of failing, so gates built from them stay well defined.
pub fn from_nano(nano: u128) -> Decimal {
    let clamped = i128::try_from(nano).unwrap_or(i128::MAX);
    Decimal::try_from_i128_with_scale(clamped, NANO_SCALE)
        .unwrap_or(Decimal::MAX)
        .normalize()
}

/// Staking pool metadata as surfaced by the pool list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoolInfo {
    pub address: TokenAddress,
    pub name: String,
    /// Advertised annual yield, percent.
    pub apy: Decimal,
    /// Minimum accepted stake, nano units.
    pub min_stake: u128,
    /// Current validation cycle bounds, unix seconds.
    pub cycle_start: u64,
    pub cycle_end: u64,
}

impl PoolInfo {
    /// Minimum stake in whole-coin units, the floor enforced on deposits.
    pub fn min_stake_decimal(&self) -> Decimal {
        from_nano(self.min_stake)
    }
}

/// Directory entry for a staking provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingProvider {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

/// The active account's position in a single pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStakingInfo {
    pub pool: TokenAddress,
    /// Currently staked amount, string-encoded nano units.
    pub amount: String,
    pub pending_deposit: String,
    pub pending_withdraw: String,
    pub ready_withdraw: String,
}

/// Fetch status advertised by [`StakingStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakingApiStatus {
    BackgroundFetching,
    Refreshing,
    #[default]
    Idle,
}

/// Account positions keyed by pool address.
pub type StakingInfo = HashMap<TokenAddress, AccountStakingInfo>;
