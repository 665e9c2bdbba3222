use rust_decimal::Decimal;

use super::PoolInfo;
use crate::amount::{parse_locale_number, LocaleFormat};

/// Decides whether an entered staking amount may proceed to confirmation.
///
/// Built per flow: deposits floor at the pool's minimum stake and ceil at the
/// wallet balance, withdrawals have no floor and ceil at the staked balance.
/// Lockup wallets bypass the ceiling entirely — their vault accounting lets
/// them commit past the nominal balance.
#[derive(Clone, Debug, PartialEq)]
pub struct StakeAmountGate {
    min_amount: Decimal,
    balance_ceiling: Decimal,
    lockup: bool,
}

impl StakeAmountGate {
    pub fn new(min_amount: Decimal, balance_ceiling: Decimal, lockup: bool) -> Self {
        StakeAmountGate {
            min_amount,
            balance_ceiling,
            lockup,
        }
    }

    /// Gate for topping up `pool` out of the wallet balance.
    pub fn deposit(pool: &PoolInfo, wallet_balance: Decimal, lockup: bool) -> Self {
        StakeAmountGate::new(pool.min_stake_decimal(), wallet_balance, lockup)
    }

    /// Gate for withdrawing from an existing stake. No minimum applies.
    pub fn withdrawal(staking_balance: Decimal, lockup: bool) -> Self {
        StakeAmountGate::new(Decimal::ZERO, staking_balance, lockup)
    }

    pub fn min_amount(&self) -> Decimal {
        self.min_amount
    }

    pub fn balance_ceiling(&self) -> Decimal {
        self.balance_ceiling
    }

    pub fn is_lockup(&self) -> bool {
        self.lockup
    }

    /// Parse the raw entry under `locale` and evaluate [`can_continue`].
    /// Malformed text simply fails the positivity check.
    pub fn evaluate(&self, raw_text: &str, locale: &LocaleFormat) -> bool {
        match parse_locale_number(raw_text, locale) {
            Some(amount) => can_continue(amount, self.balance_ceiling, self.min_amount, self.lockup),
            None => false,
        }
    }
}

/// Continue is allowed iff the amount is strictly positive, within the
/// ceiling unless the wallet is a lockup wallet, and at or above the minimum.
pub fn can_continue(
    amount: Decimal,
    balance_ceiling: Decimal,
    min_amount: Decimal,
    lockup: bool,
) -> bool {
    amount > Decimal::ZERO && (lockup || amount <= balance_ceiling) && amount >= min_amount
}
