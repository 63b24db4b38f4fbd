//! Dynamic-pressure failures of exposed mechanisms.
//!
//! Each mechanism that is not Closed and has a pressure limit rolls once
//! per tick. Above the limit the failure chance grows with the overpressure
//! ratio and the tick length, reaching certainty at twice the limit over a
//! one second tick.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use spaceplane_core::components::MechanismTag;
use spaceplane_core::damage::{DamageItem, DamageRecord};
use spaceplane_core::enums::{DoorStatus, MechanismId};
use spaceplane_core::environment::Environment;
use spaceplane_core::events::{EventSink, RedrawArea};
use spaceplane_core::types::MechanismState;
use spaceplane_mechanisms::profiles::MechanismProfile;

use crate::mechanisms;
use crate::world_setup::MechanismIndex;

/// Failure probability for one roll.
pub fn failure_probability(dynamic_pressure: f64, limit: f64, dt: f64) -> f64 {
    if limit <= 0.0 || dynamic_pressure <= limit {
        return 0.0;
    }
    ((dynamic_pressure / limit - 1.0) * dt).clamp(0.0, 1.0)
}

pub fn run(
    world: &mut World,
    index: &MechanismIndex,
    env: &Environment,
    damage: &mut DamageRecord,
    rng: &mut ChaCha8Rng,
    dt: f64,
    sink: &mut impl EventSink,
) {
    if env.dynamic_pressure <= 0.0 {
        return;
    }

    let mut exposed: Vec<(MechanismId, f64)> = world
        .query::<(&MechanismTag, &MechanismState, &MechanismProfile)>()
        .iter()
        .filter(|(_, (_, state, _))| !matches!(state.status, DoorStatus::Closed | DoorStatus::Failed))
        .filter_map(|(_, (tag, _, profile))| profile.max_dynamic_pressure.map(|limit| (tag.id, limit)))
        .collect();
    // Query order is archetype order; roll in mechanism order for determinism.
    exposed.sort_by_key(|(id, _)| *id);

    for (id, limit) in exposed {
        let chance = failure_probability(env.dynamic_pressure, limit, dt);
        if chance <= 0.0 {
            continue;
        }
        if rng.gen::<f64>() < chance {
            damage.set(DamageItem::Mechanism(id), 0.0);
            if mechanisms::set_failed(world, index, id, sink) {
                sink.redraw(RedrawArea::DamageDisplay);
                log::warn!(
                    "{} failed at q = {:.0} Pa (limit {:.0} Pa)",
                    id.label(),
                    env.dynamic_pressure,
                    limit
                );
            }
        }
    }
}
