use std::collections::HashMap;

use serde::Serialize;

use super::{ApprovalRecord, ApprovalStatus, JettonBalance, JettonVerification};
use crate::address::TokenAddress;

/// Disjoint buckets produced by [`classify`]. Every non-zero input balance
/// lands in exactly one of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedBalances {
    pub enabled: Vec<JettonBalance>,
    pub disabled: Vec<JettonBalance>,
    pub pending: Vec<JettonBalance>,
}

impl ClassifiedBalances {
    pub fn len(&self) -> usize {
        self.enabled.len() + self.disabled.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition jetton balances by trust-list flag and user overrides.
///
/// Zero balances are dropped outright. An explicit `Approved`/`Declined`
/// override always wins over the trust list: a blacklisted jetton the user
/// approved is enabled, a whitelisted jetton the user declined is disabled.
/// Everything else stays pending — unverified jettons without a record, and
/// any jetton whose record is still `Unset`.
///
/// When `preferred_order` is supplied, the enabled bucket is stable-sorted by
/// position in that sequence. Jettons absent from the sequence take the
/// sentinel position −1 and therefore sort ahead of every listed jetton; the
/// shipped ordering behaves this way, so it is preserved here even though
/// "unlisted last" is the more likely intent.
pub fn classify(
    balances: &[JettonBalance],
    approvals: &HashMap<TokenAddress, ApprovalRecord>,
    preferred_order: Option<&[TokenAddress]>,
) -> ClassifiedBalances {
    let mut buckets = ClassifiedBalances::default();

    for jetton in balances {
        if jetton.is_zero() {
            continue;
        }

        let record = approvals.get(&jetton.address);
        let current = record.map(|record| record.current);
        let whitelisted = jetton.verification == JettonVerification::Whitelisted;
        let blacklisted = jetton.verification == JettonVerification::Blacklisted;

        if (whitelisted && record.is_none()) || current == Some(ApprovalStatus::Approved) {
            buckets.enabled.push(jetton.clone());
        } else if (blacklisted && record.is_none()) || current == Some(ApprovalStatus::Declined) {
            buckets.disabled.push(jetton.clone());
        } else {
            buckets.pending.push(jetton.clone());
        }
    }

    if let Some(order) = preferred_order {
        buckets
            .enabled
            .sort_by_key(|jetton| position_or_sentinel(order, &jetton.address));
    }

    buckets
}

/// Index of `address` within the preferred sequence, or −1 when unlisted.
fn position_or_sentinel(order: &[TokenAddress], address: &TokenAddress) -> i64 {
    order
        .iter()
        .position(|candidate| candidate == address)
        .map_or(-1, |index| index as i64)
}
