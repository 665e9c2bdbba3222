use std::collections::HashMap;

use super::{
    classify, ApprovalRecord, ApprovalStatus, JettonBalance, JettonVerification,
};
use crate::address::TokenAddress;

fn jetton(address: &str, balance: &str, verification: JettonVerification) -> JettonBalance {
    JettonBalance::new(address, balance, verification)
}

fn approvals(entries: &[(&str, ApprovalStatus)]) -> HashMap<TokenAddress, ApprovalRecord> {
    entries
        .iter()
        .map(|(address, status)| (TokenAddress::new(address), ApprovalRecord::new(*status)))
        .collect()
}

fn addresses(buckets: &[JettonBalance]) -> Vec<&str> {
    buckets.iter().map(|jetton| jetton.address.as_str()).collect()
}

#[test]
fn zero_balance_jettons_are_dropped_before_classification() {
    let balances = vec![
        jetton("0:aa", "0", JettonVerification::Whitelisted),
        jetton("0:bb", "10", JettonVerification::Whitelisted),
    ];
    let buckets = classify(&balances, &HashMap::new(), None);
    assert_eq!(buckets.len(), 1);
    assert_eq!(addresses(&buckets.enabled), vec!["0:bb"]);
}

#[test]
fn trust_list_decides_when_no_record_exists() {
    let balances = vec![
        jetton("0:wl", "1", JettonVerification::Whitelisted),
        jetton("0:bl", "1", JettonVerification::Blacklisted),
        jetton("0:uv", "1", JettonVerification::Unverified),
    ];
    let buckets = classify(&balances, &HashMap::new(), None);
    assert_eq!(addresses(&buckets.enabled), vec!["0:wl"]);
    assert_eq!(addresses(&buckets.disabled), vec!["0:bl"]);
    assert_eq!(addresses(&buckets.pending), vec!["0:uv"]);
}

#[test]
fn explicit_overrides_beat_the_trust_list() {
    let balances = vec![
        jetton("0:wl", "1", JettonVerification::Whitelisted),
        jetton("0:bl", "1", JettonVerification::Blacklisted),
    ];
    let approvals = approvals(&[
        ("0:wl", ApprovalStatus::Declined),
        ("0:bl", ApprovalStatus::Approved),
    ]);
    let buckets = classify(&balances, &approvals, None);
    assert_eq!(addresses(&buckets.enabled), vec!["0:bl"]);
    assert_eq!(addresses(&buckets.disabled), vec!["0:wl"]);
}

#[test]
fn unset_records_keep_even_whitelisted_jettons_pending() {
    let balances = vec![jetton("0:wl", "1", JettonVerification::Whitelisted)];
    let approvals = approvals(&[("0:wl", ApprovalStatus::Unset)]);
    let buckets = classify(&balances, &approvals, None);
    assert!(buckets.enabled.is_empty());
    assert_eq!(addresses(&buckets.pending), vec!["0:wl"]);
}

#[test]
fn approval_lookup_uses_normalized_addresses() {
    let balances = vec![jetton("0:ABCD", "1", JettonVerification::Unverified)];
    let approvals = approvals(&[("0:abcd", ApprovalStatus::Approved)]);
    let buckets = classify(&balances, &approvals, None);
    assert_eq!(addresses(&buckets.enabled), vec!["0:abcd"]);
}

#[test]
fn every_nonzero_jetton_lands_in_exactly_one_bucket() {
    let balances = vec![
        jetton("0:a", "1", JettonVerification::Whitelisted),
        jetton("0:b", "0", JettonVerification::Whitelisted),
        jetton("0:c", "2", JettonVerification::Blacklisted),
        jetton("0:d", "3", JettonVerification::Unverified),
        jetton("0:e", "4", JettonVerification::Blacklisted),
    ];
    let approvals = approvals(&[("0:e", ApprovalStatus::Approved)]);
    let buckets = classify(&balances, &approvals, None);
    assert_eq!(buckets.len(), 4);

    let mut seen: Vec<&str> = Vec::new();
    seen.extend(addresses(&buckets.enabled));
    seen.extend(addresses(&buckets.disabled));
    seen.extend(addresses(&buckets.pending));
    seen.sort_unstable();
    assert_eq!(seen, vec!["0:a", "0:c", "0:d", "0:e"]);
}

#[test]
fn preferred_order_sorts_unlisted_jettons_first() {
    let balances = vec![
        jetton("0:a", "1", JettonVerification::Whitelisted),
        jetton("0:b", "1", JettonVerification::Whitelisted),
        jetton("0:c", "1", JettonVerification::Whitelisted),
    ];
    let order = vec![TokenAddress::new("0:b"), TokenAddress::new("0:a")];
    let buckets = classify(&balances, &HashMap::new(), Some(&order));
    // "0:c" is unlisted, takes the −1 sentinel, and sorts ahead of the listed
    // jettons. The intuitive result would be ["0:b", "0:a", "0:c"]; the
    // sentinel behavior is deliberate fidelity to the shipped ordering.
    assert_eq!(addresses(&buckets.enabled), vec!["0:c", "0:b", "0:a"]);
}

#[test]
fn unlisted_jettons_keep_their_relative_order() {
    let balances = vec![
        jetton("0:x", "1", JettonVerification::Whitelisted),
        jetton("0:y", "1", JettonVerification::Whitelisted),
        jetton("0:a", "1", JettonVerification::Whitelisted),
    ];
    let order = vec![TokenAddress::new("0:a")];
    let buckets = classify(&balances, &HashMap::new(), Some(&order));
    assert_eq!(addresses(&buckets.enabled), vec!["0:x", "0:y", "0:a"]);
}

#[test]
fn without_preferred_order_insertion_order_is_kept() {
    let balances = vec![
        jetton("0:z", "1", JettonVerification::Whitelisted),
        jetton("0:a", "1", JettonVerification::Whitelisted),
    ];
    let buckets = classify(&balances, &HashMap::new(), None);
    assert_eq!(addresses(&buckets.enabled), vec!["0:z", "0:a"]);
}
