//! Cross-mechanism interlock rules.
//!
//! Rules are plain data evaluated at request time only. A rule never
//! changes state; it answers whether a transition may be committed and,
//! if not, which warning to give.

use std::collections::BTreeMap;

use spaceplane_core::constants::ELEVATOR_MIN_ALTITUDE;
use spaceplane_core::enums::{DoorStatus, MechanismId};
use spaceplane_core::environment::Environment;
use spaceplane_core::events::Warning;
use spaceplane_core::types::MechanismState;

/// Pure predicate over the host environment. `true` means satisfied.
pub type Precondition = fn(&Environment) -> bool;

/// One gate on a mechanism's `RequestTransition`.
#[derive(Debug, Clone, Copy)]
pub enum InterlockRule {
    /// Blocked while `other` is Opening or Closing.
    BlockedWhileMoving { other: MechanismId, warning: Warning },
    /// Blocked while `other` sits in the given status.
    BlockedWhileStatus {
        other: MechanismId,
        status: DoorStatus,
        warning: Warning,
    },
    /// Blocked unless the environment predicate holds.
    Requires { check: Precondition, warning: Warning },
}

/// Read access to the other mechanisms' statuses.
pub trait MechanismLookup {
    fn status_of(&self, id: MechanismId) -> Option<DoorStatus>;
}

impl MechanismLookup for BTreeMap<MechanismId, DoorStatus> {
    fn status_of(&self, id: MechanismId) -> Option<DoorStatus> {
        self.get(&id).copied()
    }
}

impl MechanismLookup for BTreeMap<MechanismId, MechanismState> {
    fn status_of(&self, id: MechanismId) -> Option<DoorStatus> {
        self.get(&id).map(|s| s.status)
    }
}

impl InterlockRule {
    /// True when this rule forbids a transition right now.
    pub fn blocks(&self, others: &impl MechanismLookup, env: &Environment) -> bool {
        match *self {
            InterlockRule::BlockedWhileMoving { other, .. } => others
                .status_of(other)
                .is_some_and(|status| status.is_moving()),
            InterlockRule::BlockedWhileStatus { other, status, .. } => {
                others.status_of(other) == Some(status)
            }
            InterlockRule::Requires { check, .. } => !check(env),
        }
    }

    pub fn warning(&self) -> &Warning {
        match self {
            InterlockRule::BlockedWhileMoving { warning, .. }
            | InterlockRule::BlockedWhileStatus { warning, .. }
            | InterlockRule::Requires { warning, .. } => warning,
        }
    }
}

/// First rule, in declared order, that blocks the transition.
pub fn first_blocking<'a>(
    rules: &'a [InterlockRule],
    others: &impl MechanismLookup,
    env: &Environment,
) -> Option<&'a InterlockRule> {
    rules.iter().find(|rule| rule.blocks(others, env))
}

// --- Environment predicates ---

pub fn has_hydraulic_pressure(env: &Environment) -> bool {
    env.hydraulic_pressure
}

pub fn gear_fully_uncompressed(env: &Environment) -> bool {
    env.gear_fully_uncompressed()
}

/// Elevator clears the ground.
pub fn elevator_ground_clearance(env: &Environment) -> bool {
    env.altitude_above_ground >= ELEVATOR_MIN_ALTITUDE
}

// --- Shared warnings ---

pub const HYDRAULIC_PRESSURE_WARNING: Warning = Warning {
    sound: "Warning Hydraulic Pressure",
    text: "No hydraulic pressure: APU is offline.",
};

pub const RADIATOR_MOVING_LOCKS_BAY: Warning = Warning {
    sound: "Warning Radiator in Motion Bay Doors Are Locked",
    text: "Cannot open/close bay doors while radiator is in motion.",
};

pub const BAY_MOVING_LOCKS_RADIATOR: Warning = Warning {
    sound: "Warning Bay Doors in Motion Radiator is Locked",
    text: "Cannot deploy/retract radiator while bay doors are in motion.",
};

pub const BAY_OPEN_LOCKS_RADIATOR: Warning = Warning {
    sound: "Warning Bay Doors Open Radiator is Locked",
    text: "Cannot deploy/retract radiator while bay doors are open.",
};

pub const ELEVATOR_GROUND_IMPACT: Warning = Warning {
    sound: "Warning Elevator Failure",
    text: "Elevator inoperative: ground impact.",
};

pub const GEAR_ON_GROUND: Warning = Warning {
    sound: "Gear Locked",
    text: "Gear is still in contact with the ground: cannot raise landing gear.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_rule_uses_predicate() {
        let rule = InterlockRule::Requires {
            check: gear_fully_uncompressed,
            warning: GEAR_ON_GROUND,
        };
        let others: BTreeMap<MechanismId, DoorStatus> = BTreeMap::new();
        let mut env = Environment {
            nose_gear_uncompressed: 0.6,
            ..Default::default()
        };
        assert!(rule.blocks(&others, &env));
        env.nose_gear_uncompressed = 1.0;
        assert!(!rule.blocks(&others, &env));
    }

    #[test]
    fn test_missing_mechanism_never_blocks() {
        let rule = InterlockRule::BlockedWhileMoving {
            other: MechanismId::Radiator,
            warning: RADIATOR_MOVING_LOCKS_BAY,
        };
        let others: BTreeMap<MechanismId, DoorStatus> = BTreeMap::new();
        assert!(!rule.blocks(&others, &Environment::default()));
    }

    #[test]
    fn test_elevator_clearance_threshold() {
        let mut env = Environment {
            altitude_above_ground: ELEVATOR_MIN_ALTITUDE,
            ..Default::default()
        };
        assert!(elevator_ground_clearance(&env));
        env.altitude_above_ground -= 0.01;
        assert!(!elevator_ground_clearance(&env));
    }
}
