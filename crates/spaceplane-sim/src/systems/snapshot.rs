//! Snapshot system: builds the VesselSnapshot handed to the host.
//!
//! Read-only over the world.

use hecs::World;

use spaceplane_core::components::MechanismTag;
use spaceplane_core::damage::DamageRecord;
use spaceplane_core::enums::ActiveEvaPort;
use spaceplane_core::events::EventLog;
use spaceplane_core::state::{MechanismView, RcsView, ThrusterGroupView, VesselSnapshot};
use spaceplane_core::types::{MechanismState, SimTime};
use spaceplane_rcs::autopilot::RcsController;

use super::mass::MassUpdate;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    damage: &DamageRecord,
    rcs: &RcsController,
    active_eva_port: ActiveEvaPort,
    mass: MassUpdate,
    events: EventLog,
) -> VesselSnapshot {
    VesselSnapshot {
        time: *time,
        mechanisms: build_mechanisms(world, damage),
        rcs: build_rcs(rcs),
        active_eva_port,
        custom_autopilot: rcs.custom_autopilot(),
        nav_modes: rcs.nav_modes().collect(),
        payload_mass_ratio: mass.payload_mass_ratio,
        payload_mass_kg: mass.payload_mass_kg,
        redraws: events.redraws,
        audio_events: events.audio,
        callouts: events.callouts,
        recorded_events: events.recorded,
    }
}

fn build_mechanisms(world: &World, damage: &DamageRecord) -> Vec<MechanismView> {
    let mut views: Vec<MechanismView> = world
        .query::<(&MechanismTag, &MechanismState)>()
        .iter()
        .map(|(_, (tag, state))| MechanismView {
            id: tag.id,
            status: state.status,
            progress: state.progress,
            integrity: damage.mechanism(tag.id),
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_rcs(rcs: &RcsController) -> RcsView {
    let configurator = rcs.configurator();
    RcsView {
        layout: configurator.layout(),
        groups: configurator
            .map()
            .iter()
            .map(|(group, thrusters)| ThrusterGroupView {
                group,
                thrusters: thrusters.to_vec(),
            })
            .collect(),
        thruster_max: configurator.thruster_max().to_vec(),
    }
}
