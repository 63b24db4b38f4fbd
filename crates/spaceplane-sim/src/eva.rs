//! Active EVA port selection and the EVA door check.

use hecs::World;

use spaceplane_core::enums::{ActiveEvaPort, DoorStatus, MechanismId};
use spaceplane_core::environment::Environment;
use spaceplane_core::events::{EventSink, RedrawArea, Warning};
use spaceplane_mechanisms::interlock::elevator_ground_clearance;

use crate::mechanisms::state_of;
use crate::world_setup::MechanismIndex;

pub const ELEVATOR_DAMAGED: Warning = Warning {
    sound: "Warning Elevator Failure",
    text: "Crew Elevator is damaged.",
};

pub const ELEVATOR_STOWED: Warning = Warning {
    sound: "Warning Elevator Stowed",
    text: "Crew Elevator is stowed.",
};

pub const OUTER_DOOR_CLOSED: Warning = Warning {
    sound: "Warning Outer Door is Closed",
    text: "Outer airlock door is closed.",
};

/// Switches the active port and redraws both port LEDs and the switch.
pub fn set_active_port(current: &mut ActiveEvaPort, port: ActiveEvaPort, sink: &mut impl EventSink) {
    *current = port;
    sink.redraw(RedrawArea::DockingPortEvaLed);
    sink.redraw(RedrawArea::CrewElevatorEvaLed);
    sink.redraw(RedrawArea::ActiveEvaPortSwitch);
}

/// True when a crew member may EVA through the active port.
pub fn check_eva_door(
    port: ActiveEvaPort,
    world: &World,
    index: &MechanismIndex,
    env: &Environment,
    sink: &mut impl EventSink,
) -> bool {
    let airlock = state_of(world, index, port.airlock_mechanism()).map(|s| s.status);
    match port {
        ActiveEvaPort::CrewElevator => {
            if airlock == Some(DoorStatus::Failed) || !elevator_ground_clearance(env) {
                sink.warn(&ELEVATOR_DAMAGED);
                return false;
            }
            if airlock != Some(DoorStatus::Open) {
                sink.warn(&ELEVATOR_STOWED);
                return false;
            }
        }
        ActiveEvaPort::DockingPort => {
            if airlock != Some(DoorStatus::Open) {
                sink.warn(&OUTER_DOOR_CLOSED);
                return false;
            }
        }
    }
    log::debug!("EVA permitted via {:?} ({})", port, port_mechanism_label(port));
    true
}

fn port_mechanism_label(port: ActiveEvaPort) -> &'static str {
    match port.airlock_mechanism() {
        MechanismId::CrewElevator => "crew elevator",
        _ => "outer airlock",
    }
}
