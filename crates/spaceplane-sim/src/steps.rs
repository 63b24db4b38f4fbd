//! Pre- and Post-step queues.
//!
//! Each phase is one ordered list of step ids that the engine walks every
//! tick. Steps are not a scheduler: they run to completion in order.

use serde::{Deserialize, Serialize};

/// Steps that run after commands and before the Post-step queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreStep {
    /// Sanitize strut readings and announce touchdown / liftoff.
    GearCompression,
    /// Roll for dynamic-pressure failure of every open mechanism.
    DoorStress,
    /// Snapshot this tick's values for next tick's comparisons.
    UpdatePreviousFields,
}

/// Steps that run last in the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStep {
    FuelCallouts,
    UpdateMass,
    Animation,
    DoorSounds,
    DockChangeAirlock,
}

/// Ordering constraint for a queue entry.
pub trait StepKind: Copy + PartialEq {
    /// Must stay at the tail of its queue.
    fn runs_last(self) -> bool {
        false
    }
}

impl StepKind for PreStep {
    fn runs_last(self) -> bool {
        self == PreStep::UpdatePreviousFields
    }
}

impl StepKind for PostStep {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepQueue<S> {
    steps: Vec<S>,
}

impl<S: StepKind> StepQueue<S> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step, keeping tail-bound steps last. Duplicates are ignored.
    pub fn push(&mut self, step: S) {
        if self.steps.contains(&step) {
            return;
        }
        let at = if step.runs_last() {
            self.steps.len()
        } else {
            self.steps
                .iter()
                .position(|s| s.runs_last())
                .unwrap_or(self.steps.len())
        };
        self.steps.insert(at, step);
    }

    pub fn remove(&mut self, step: S) -> bool {
        let before = self.steps.len();
        self.steps.retain(|s| *s != step);
        self.steps.len() != before
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }
}

impl<S: StepKind> Default for StepQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StepKind> FromIterator<S> for StepQueue<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut queue = Self::new();
        for step in iter {
            queue.push(step);
        }
        queue
    }
}

/// The vessel's Pre-step queue.
pub fn default_pre_steps() -> StepQueue<PreStep> {
    [
        PreStep::GearCompression,
        PreStep::DoorStress,
        PreStep::UpdatePreviousFields,
    ]
    .into_iter()
    .collect()
}

/// The vessel's Post-step queue.
pub fn default_post_steps() -> StepQueue<PostStep> {
    [
        PostStep::FuelCallouts,
        PostStep::UpdateMass,
        PostStep::Animation,
        PostStep::DoorSounds,
        PostStep::DockChangeAirlock,
    ]
    .into_iter()
    .collect()
}
