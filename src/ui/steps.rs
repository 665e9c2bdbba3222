use std::collections::HashMap;
use std::time::Duration;

/// Delay before the amount field grabs focus on the very first activation,
/// while the step is still sliding in.
pub const FIRST_FOCUS_DELAY: Duration = Duration::from_millis(400);
/// Delay before focus is released once the step deactivates.
pub const BLUR_DELAY: Duration = Duration::from_millis(300);

/// Steps of the staking send flow, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StakingSendStep {
    Amount,
    Confirm,
    Done,
}

impl StakingSendStep {
    /// Ordered list of steps as the flow presents them.
    pub const ALL: [StakingSendStep; 3] = [
        StakingSendStep::Amount,
        StakingSendStep::Confirm,
        StakingSendStep::Done,
    ];

    /// Human readable title rendered in the step header.
    pub const fn title(self) -> &'static str {
        match self {
            StakingSendStep::Amount => "Amount",
            StakingSendStep::Confirm => "Confirm",
            StakingSendStep::Done => "Done",
        }
    }

    /// Index of the step in [`StakingSendStep::ALL`].
    pub const fn index(self) -> usize {
        match self {
            StakingSendStep::Amount => 0,
            StakingSendStep::Confirm => 1,
            StakingSendStep::Done => 2,
        }
    }

    /// The following step, if the flow has one.
    pub fn next(self) -> Option<StakingSendStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding step, if the flow has one.
    pub fn previous(self) -> Option<StakingSendStep> {
        self.index().checked_sub(1).map(|index| Self::ALL[index])
    }
}

/// Last known scroll offset per step, fed from scroll events so a step
/// reactivates at the position the user left it.
#[derive(Clone, Debug, Default)]
pub struct StepScrollTracker {
    offsets: HashMap<StakingSendStep, f32>,
}

impl StepScrollTracker {
    pub fn new() -> Self {
        StepScrollTracker::default()
    }

    pub fn record(&mut self, step: StakingSendStep, offset: f32) {
        self.offsets.insert(step, offset);
    }

    /// Offset for `step`, zero until a scroll event has been recorded.
    pub fn offset(&self, step: StakingSendStep) -> f32 {
        self.offsets.get(&step).copied().unwrap_or(0.0)
    }
}

/// What the shell should do with the amount field's focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusDirective {
    FocusAfter(Duration),
    Focus,
    BlurAfter(Duration),
}

/// Focus choreography of the amount field.
///
/// The very first activation focuses after [`FIRST_FOCUS_DELAY`]; later
/// activations focus immediately; deactivation blurs after [`BLUR_DELAY`].
/// A first observation that arrives inactive produces no directive but still
/// consumes the first-activation treatment.
#[derive(Clone, Debug)]
pub struct FocusChoreographer {
    first_render: bool,
}

impl Default for FocusChoreographer {
    fn default() -> Self {
        FocusChoreographer { first_render: true }
    }
}

impl FocusChoreographer {
    pub fn new() -> Self {
        FocusChoreographer::default()
    }

    pub fn on_active_changed(&mut self, active: bool) -> Option<FocusDirective> {
        if self.first_render {
            self.first_render = false;
            return active.then_some(FocusDirective::FocusAfter(FIRST_FOCUS_DELAY));
        }
        if active {
            Some(FocusDirective::Focus)
        } else {
            Some(FocusDirective::BlurAfter(BLUR_DELAY))
        }
    }
}
