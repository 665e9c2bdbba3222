use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::{AccountStakingInfo, PoolInfo, StakingApiStatus, StakingInfo, StakingProvider};
use crate::address::TokenAddress;

/// Pool and position data backing the staking screens.
///
/// Pure state container: the caller performs the actual fetch and feeds the
/// outcome back through [`StakingStore::complete_fetch`] or
/// [`StakingStore::fail_fetch`]. At most one fetch is in flight;
/// [`StakingStore::begin_fetch`] refuses while the store is not idle.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StakingStore {
    max_apy: Option<Decimal>,
    status: StakingApiStatus,
    pools: Vec<PoolInfo>,
    providers: Vec<StakingProvider>,
    staking_info: StakingInfo,
}

impl StakingStore {
    pub fn new() -> Self {
        StakingStore::default()
    }

    pub fn status(&self) -> StakingApiStatus {
        self.status
    }

    /// Highest APY across the known pools, if any are loaded.
    pub fn max_apy(&self) -> Option<Decimal> {
        self.max_apy
    }

    pub fn pools(&self) -> &[PoolInfo] {
        &self.pools
    }

    pub fn providers(&self) -> &[StakingProvider] {
        &self.providers
    }

    /// The account's position in `pool`, if one is recorded.
    pub fn info_for(&self, pool: &TokenAddress) -> Option<&AccountStakingInfo> {
        self.staking_info.get(pool)
    }

    /// Move into a fetching state. Silent refreshes keep the previous data on
    /// screen and surface as `BackgroundFetching`; loud ones surface as
    /// `Refreshing`. Returns `false` without changing state when a fetch is
    /// already running.
    pub fn begin_fetch(&mut self, silent: bool) -> bool {
        if self.status != StakingApiStatus::Idle {
            debug!(status = ?self.status, "staking refresh already in flight; skipping");
            return false;
        }
        self.status = if silent {
            StakingApiStatus::BackgroundFetching
        } else {
            StakingApiStatus::Refreshing
        };
        true
    }

    /// Install a freshly fetched snapshot and return to idle. The maximum APY
    /// is recomputed from the incoming pool list.
    pub fn complete_fetch(
        &mut self,
        pools: Vec<PoolInfo>,
        providers: Vec<StakingProvider>,
        staking_info: StakingInfo,
    ) {
        self.max_apy = pools.iter().map(|pool| pool.apy).max();
        self.pools = pools;
        self.providers = providers;
        self.staking_info = staking_info;
        self.status = StakingApiStatus::Idle;
    }

    /// Abandon the in-flight fetch and keep the last loaded snapshot.
    pub fn fail_fetch(&mut self) {
        warn!("staking refresh failed; keeping previous snapshot");
        self.status = StakingApiStatus::Idle;
    }
}
