//! Mechanism-specific profiles.
//!
//! Consolidates per-mechanism parameters: transit time, interlock rules,
//! redraw areas, playback event name, failure warning and the dynamic
//! pressure the mechanism tolerates while not closed.

use spaceplane_core::enums::{DoorStatus, MechanismId};
use spaceplane_core::events::{RedrawArea, Warning};
use spaceplane_core::types::MechanismState;

use crate::interlock::*;

/// Behavioral profile for one mechanism.
#[derive(Debug, Clone)]
pub struct MechanismProfile {
    pub id: MechanismId,
    /// Seconds from fully closed to fully open.
    pub nominal_duration_secs: f64,
    /// Checked in order after the Failed check.
    pub rules: Vec<InterlockRule>,
    /// Given when a request arrives while the mechanism is Failed, and when
    /// door stress fails it.
    pub failure_warning: Warning,
    /// Dynamic pressure limit (Pa) while not Closed. `None` for internal doors.
    pub max_dynamic_pressure: Option<f64>,
    /// State used when a scenario omits this mechanism.
    pub default_state: MechanismState,
}

impl MechanismProfile {
    /// Switch and indicator areas.
    pub fn redraw_areas(&self) -> [RedrawArea; 2] {
        [
            RedrawArea::MechanismSwitch(self.id),
            RedrawArea::MechanismIndicator(self.id),
        ]
    }

    /// Playback event type.
    pub fn event_name(&self) -> &'static str {
        self.id.scenario_key()
    }
}

fn hydraulics() -> InterlockRule {
    InterlockRule::Requires {
        check: has_hydraulic_pressure,
        warning: HYDRAULIC_PRESSURE_WARNING,
    }
}

/// Get the profile for a given mechanism.
pub fn get_profile(id: MechanismId) -> MechanismProfile {
    use spaceplane_core::constants::*;

    let closed = MechanismState::closed();
    match id {
        MechanismId::LandingGear => MechanismProfile {
            id,
            nominal_duration_secs: GEAR_TRANSIT_SECS,
            rules: vec![
                InterlockRule::Requires {
                    check: gear_fully_uncompressed,
                    warning: GEAR_ON_GROUND,
                },
                hydraulics(),
            ],
            failure_warning: Warning {
                sound: "Warning Gear Failure",
                text: "Landing gear inoperative due to excessive dynamic pressure.",
            },
            max_dynamic_pressure: Some(GEAR_MAX_DYNAMIC_PRESSURE),
            default_state: MechanismState::open(),
        },
        MechanismId::RetroDoors => MechanismProfile {
            id,
            nominal_duration_secs: RETRO_DOOR_TRANSIT_SECS,
            rules: vec![hydraulics()],
            failure_warning: Warning {
                sound: "Warning Retro Door Failure",
                text: "Retro doors inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(RETRO_DOOR_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::HoverDoors => MechanismProfile {
            id,
            nominal_duration_secs: HOVER_DOOR_TRANSIT_SECS,
            rules: vec![hydraulics()],
            failure_warning: Warning {
                sound: "Warning Hover Door Failure",
                text: "Hover doors inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(HOVER_DOOR_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::ScramDoors => MechanismProfile {
            id,
            nominal_duration_secs: SCRAM_DOOR_TRANSIT_SECS,
            rules: vec![hydraulics()],
            failure_warning: Warning {
                sound: "Warning SCRAM Door Failure",
                text: "SCRAM doors inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(SCRAM_DOOR_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::NoseCone => MechanismProfile {
            id,
            nominal_duration_secs: NOSECONE_TRANSIT_SECS,
            rules: vec![hydraulics()],
            failure_warning: Warning {
                sound: "Warning Nosecone Failure",
                text: "Nosecone inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(NOSECONE_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::OuterAirlock => MechanismProfile {
            id,
            nominal_duration_secs: AIRLOCK_TRANSIT_SECS,
            rules: vec![hydraulics()],
            failure_warning: Warning {
                sound: "Warning Outer Door Failure",
                text: "Outer airlock door inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(AIRLOCK_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::InnerAirlock => MechanismProfile {
            id,
            nominal_duration_secs: AIRLOCK_TRANSIT_SECS,
            rules: vec![hydraulics()],
            failure_warning: Warning {
                sound: "Warning Inner Door Failure",
                text: "Inner airlock door inoperative.",
            },
            max_dynamic_pressure: None,
            default_state: closed,
        },
        MechanismId::Hatch => MechanismProfile {
            id,
            nominal_duration_secs: HATCH_TRANSIT_SECS,
            rules: vec![hydraulics()],
            failure_warning: Warning {
                sound: "Warning Hatch Failure",
                text: "Top hatch inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(HATCH_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::Radiator => MechanismProfile {
            id,
            nominal_duration_secs: RADIATOR_TRANSIT_SECS,
            rules: vec![
                hydraulics(),
                InterlockRule::BlockedWhileMoving {
                    other: MechanismId::BayDoors,
                    warning: BAY_MOVING_LOCKS_RADIATOR,
                },
                InterlockRule::BlockedWhileStatus {
                    other: MechanismId::BayDoors,
                    status: DoorStatus::Open,
                    warning: BAY_OPEN_LOCKS_RADIATOR,
                },
            ],
            failure_warning: Warning {
                sound: "Warning Radiator Failure",
                text: "Radiator inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(RADIATOR_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::BayDoors => MechanismProfile {
            id,
            nominal_duration_secs: BAY_DOOR_TRANSIT_SECS,
            rules: vec![InterlockRule::BlockedWhileMoving {
                other: MechanismId::Radiator,
                warning: RADIATOR_MOVING_LOCKS_BAY,
            }],
            failure_warning: Warning {
                sound: "Warning Bay Door Failure",
                text: "Bay doors inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(BAY_DOOR_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
        MechanismId::CrewElevator => MechanismProfile {
            id,
            nominal_duration_secs: ELEVATOR_TRANSIT_SECS,
            rules: vec![
                hydraulics(),
                InterlockRule::Requires {
                    check: elevator_ground_clearance,
                    warning: ELEVATOR_GROUND_IMPACT,
                },
            ],
            failure_warning: Warning {
                sound: "Warning Elevator Failure",
                text: "Elevator inoperative due to excessive heat and/or dynamic pressure.",
            },
            max_dynamic_pressure: Some(ELEVATOR_MAX_DYNAMIC_PRESSURE),
            default_state: closed,
        },
    }
}
