use crate::amount::LocaleFormat;
use crate::staking::StakeAmountGate;

/// State behind the amount entry step.
///
/// Owns the raw text and the submission flag. Readiness is recomputed from
/// scratch through the gate on every query, so the continue button can never
/// go stale against an updated balance or pool context.
#[derive(Clone, Debug)]
pub struct AmountStepState {
    gate: StakeAmountGate,
    locale: LocaleFormat,
    amount_text: String,
    preparing: bool,
}

impl AmountStepState {
    pub fn new(gate: StakeAmountGate, locale: LocaleFormat) -> Self {
        AmountStepState {
            gate,
            locale,
            amount_text: String::new(),
            preparing: false,
        }
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount_text = text.into();
    }

    /// Swap in a new gate when the balance or pool context changes.
    pub fn set_gate(&mut self, gate: StakeAmountGate) {
        self.gate = gate;
    }

    pub fn gate(&self) -> &StakeAmountGate {
        &self.gate
    }

    pub fn is_preparing(&self) -> bool {
        self.preparing
    }

    /// Flag a submission in flight; the continue action stays disabled while
    /// set, independently of amount validity.
    pub fn set_preparing(&mut self, preparing: bool) {
        self.preparing = preparing;
    }

    /// The gate's verdict for the current text.
    pub fn is_ready_to_continue(&self) -> bool {
        self.gate.evaluate(&self.amount_text, &self.locale)
    }

    /// Continue is clickable only when ready and no submission is in flight.
    pub fn continue_enabled(&self) -> bool {
        self.is_ready_to_continue() && !self.preparing
    }
}
