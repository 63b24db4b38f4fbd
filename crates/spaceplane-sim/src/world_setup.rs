//! Entity spawn factories for the vessel's mechanisms.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use spaceplane_core::components::{DoorSoundLatch, MechanismTag};
use spaceplane_core::enums::MechanismId;

use crate::config::VesselConfig;

/// Mechanism id → its entity.
pub type MechanismIndex = BTreeMap<MechanismId, Entity>;

/// Spawns one entity per mechanism in its default state.
pub fn spawn_mechanisms(world: &mut World, vessel: &VesselConfig) -> MechanismIndex {
    MechanismId::ALL
        .into_iter()
        .map(|id| (id, spawn_mechanism(world, vessel, id)))
        .collect()
}

pub fn spawn_mechanism(world: &mut World, vessel: &VesselConfig, id: MechanismId) -> Entity {
    let profile = vessel.profile(id);
    let state = profile.default_state;
    world.spawn((
        MechanismTag { id },
        state,
        DoorSoundLatch {
            last_status: state.status,
        },
        profile,
    ))
}
