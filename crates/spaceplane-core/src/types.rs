//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

use crate::enums::{DoorStatus, JumpTarget};

/// Status + progress of one door-like mechanism.
///
/// `progress` is always in [0, 1]: 0 fully closed, 1 fully open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MechanismState {
    pub status: DoorStatus,
    pub progress: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl MechanismState {
    /// Builds a state, clamping progress into [0, 1].
    pub fn new(status: DoorStatus, progress: f64) -> Self {
        Self {
            status,
            progress: progress.clamp(0.0, 1.0),
        }
    }

    pub fn closed() -> Self {
        Self::new(DoorStatus::Closed, 0.0)
    }

    pub fn open() -> Self {
        Self::new(DoorStatus::Open, 1.0)
    }

    /// Terminal state at the given endpoint.
    pub fn at(target: JumpTarget) -> Self {
        Self::new(target.status(), target.progress())
    }

    pub fn is_moving(&self) -> bool {
        self.status.is_moving()
    }

    pub fn is_failed(&self) -> bool {
        self.status == DoorStatus::Failed
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
