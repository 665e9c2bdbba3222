//! Screen-side state for the staking send flow.
//!
//! Event-driven bookkeeping around the core validators: which step is active,
//! where each step was scrolled to, and when the amount field should grab or
//! release focus. Delays come back as directives; running the timers belongs
//! to the embedding shell, which keeps everything here synchronously testable.

mod amount_step;
mod steps;

pub use amount_step::AmountStepState;
pub use steps::{
    FocusChoreographer, FocusDirective, StakingSendStep, StepScrollTracker, BLUR_DELAY,
    FIRST_FOCUS_DELAY,
};
