//! Decision logic for a TON wallet's jetton curation and staking amount entry.
//!
//! Two independent cores live here. [`jettons::classify`] partitions a jetton
//! balance snapshot into enabled/disabled/pending buckets from the trust-list
//! flag and per-user approval overrides. [`staking::StakeAmountGate`] decides
//! whether a typed staking deposit or withdrawal amount may proceed.
//!
//! Both are pure functions over injected snapshots: they never read ambient
//! stores, never raise, and are recomputed from scratch on every input change.
//! Memoization, timers, and rendering belong to the embedding shell; the
//! [`ui`] module provides the state bookkeeping that shell needs around the
//! amount step.

pub mod address;
pub mod amount;
pub mod config;
pub mod jettons;
pub mod staking;
pub mod ui;

pub use address::TokenAddress;
pub use amount::{parse_locale_number, LocaleFormat};
pub use jettons::{
    classify, ApprovalRecord, ApprovalStatus, ClassifiedBalances, JettonBalance,
    JettonVerification,
};
pub use staking::{can_continue, PoolInfo, StakeAmountGate, StakingApiStatus, StakingStore};
