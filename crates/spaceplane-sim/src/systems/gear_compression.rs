//! Landing-gear strut sanitizing and touchdown / liftoff callouts.

use hecs::World;

use spaceplane_core::enums::{DoorStatus, MechanismId};
use spaceplane_core::environment::Environment;
use spaceplane_core::events::{Callout, EventSink};

use crate::mechanisms::state_of;
use crate::world_setup::MechanismIndex;

use super::previous_fields::PreviousFields;

/// Clamps strut readings into [0, 1]. Stowed or moving gear carries no
/// load, so its struts read fully uncompressed.
pub fn normalize_struts(world: &World, index: &MechanismIndex, env: &mut Environment) {
    let gear_down = state_of(world, index, MechanismId::LandingGear)
        .is_some_and(|s| s.status == DoorStatus::Open);

    if gear_down {
        env.nose_gear_uncompressed = sanitize(env.nose_gear_uncompressed);
        env.rear_gear_uncompressed = sanitize(env.rear_gear_uncompressed);
    } else {
        env.nose_gear_uncompressed = 1.0;
        env.rear_gear_uncompressed = 1.0;
    }
}

pub fn run(
    world: &World,
    index: &MechanismIndex,
    env: &mut Environment,
    previous: &PreviousFields,
    sink: &mut impl EventSink,
) {
    normalize_struts(world, index, env);

    let was_on_ground = previous.weight_on_wheels();
    let on_ground = env.weight_on_wheels();
    if on_ground && !was_on_ground {
        sink.callout(Callout::info("Touchdown", "Touchdown."));
        log::info!("Touchdown");
    } else if was_on_ground && !on_ground {
        sink.callout(Callout::info("Liftoff", "Liftoff."));
        log::info!("Liftoff");
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        1.0
    }
}
