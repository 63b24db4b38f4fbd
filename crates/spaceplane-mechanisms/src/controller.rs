//! Mechanism transition controller.
//!
//! Pure functions over a `MechanismState` and its profile. No ECS
//! dependency and no event sink: callers turn the returned outcome into
//! redraws, callouts and playback records.

use spaceplane_core::constants::REPAIR_OPEN_THRESHOLD;
use spaceplane_core::enums::{DoorStatus, JumpTarget, TransitionTarget};
use spaceplane_core::environment::Environment;
use spaceplane_core::events::Warning;
use spaceplane_core::types::MechanismState;

use crate::interlock::{first_blocking, MechanismLookup};
use crate::profiles::MechanismProfile;

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The mechanism is Failed.
    Failed(Warning),
    /// An interlock rule or environment guard is unmet.
    Interlock(Warning),
}

impl BlockReason {
    pub fn warning(&self) -> &Warning {
        match self {
            BlockReason::Failed(w) | BlockReason::Interlock(w) => w,
        }
    }
}

/// Result of `request_transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Status now equals the target. `reversed` is set when the request
    /// turned a transition already moving the other way.
    Committed { reversed: bool },
    /// Already moving toward the target; nothing changed.
    AlreadyInProgress,
    Blocked(BlockReason),
    /// The vessel has no such mechanism.
    Unsupported,
}

impl TransitionOutcome {
    /// True when the mechanism is now heading to the requested target.
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            TransitionOutcome::Committed { .. } | TransitionOutcome::AlreadyInProgress
        )
    }
}

/// Validates and commits a transition request.
///
/// Order: Failed first, then the idempotence check, then the profile's
/// rules in declared order. A commit assigns `status = target` and leaves
/// progress untouched.
pub fn request_transition(
    state: &mut MechanismState,
    target: TransitionTarget,
    profile: &MechanismProfile,
    others: &impl MechanismLookup,
    env: &Environment,
) -> TransitionOutcome {
    if state.status == DoorStatus::Failed {
        return TransitionOutcome::Blocked(BlockReason::Failed(profile.failure_warning));
    }
    if state.status == target.status() {
        return TransitionOutcome::AlreadyInProgress;
    }
    if let Some(rule) = first_blocking(&profile.rules, others, env) {
        return TransitionOutcome::Blocked(BlockReason::Interlock(*rule.warning()));
    }

    let reversed = state.status == target.opposite().status();
    state.status = target.status();
    TransitionOutcome::Committed { reversed }
}

/// Target a toggle request resolves to.
pub fn toggle_target(status: DoorStatus) -> TransitionTarget {
    match status {
        DoorStatus::Closed | DoorStatus::Closing => TransitionTarget::Opening,
        _ => TransitionTarget::Closing,
    }
}

/// Moves a travelling mechanism by `dt / duration`. Returns the terminal
/// status when this tick reached an endpoint.
pub fn advance_one_tick(
    state: &mut MechanismState,
    dt: f64,
    nominal_duration_secs: f64,
) -> Option<DoorStatus> {
    let step = if nominal_duration_secs > 0.0 {
        dt / nominal_duration_secs
    } else {
        1.0
    };

    match state.status {
        DoorStatus::Opening => {
            state.progress = (state.progress + step).min(1.0);
            if state.progress >= 1.0 {
                state.progress = 1.0;
                state.status = DoorStatus::Open;
                return Some(DoorStatus::Open);
            }
            None
        }
        DoorStatus::Closing => {
            state.progress = (state.progress - step).max(0.0);
            if state.progress <= 0.0 {
                state.progress = 0.0;
                state.status = DoorStatus::Closed;
                return Some(DoorStatus::Closed);
            }
            None
        }
        DoorStatus::Open | DoorStatus::Closed | DoorStatus::Failed => None,
    }
}

/// Sets the exact endpoint, bypassing the ramp and all interlocks.
pub fn force_instant_jump(state: &mut MechanismState, target: JumpTarget) {
    *state = MechanismState::at(target);
}

/// Damage subsystem only. Progress is kept so a repair can settle nearby.
pub fn set_failed(state: &mut MechanismState) {
    state.status = DoorStatus::Failed;
}

/// Clears Failed to the terminal status nearest the current progress.
/// Returns false if the mechanism was not Failed.
pub fn repair(state: &mut MechanismState) -> bool {
    if state.status != DoorStatus::Failed {
        return false;
    }
    *state = if state.progress >= REPAIR_OPEN_THRESHOLD {
        MechanismState::open()
    } else {
        MechanismState::closed()
    };
    true
}
