//! Advances every moving mechanism by one tick.

use hecs::World;

use spaceplane_core::components::MechanismTag;
use spaceplane_core::events::EventSink;
use spaceplane_core::types::MechanismState;
use spaceplane_mechanisms::controller;
use spaceplane_mechanisms::profiles::MechanismProfile;

pub fn run(world: &mut World, dt: f64, sink: &mut impl EventSink) {
    for (_, (tag, state, profile)) in
        world.query_mut::<(&MechanismTag, &mut MechanismState, &MechanismProfile)>()
    {
        if let Some(reached) = controller::advance_one_tick(state, dt, profile.nominal_duration_secs) {
            for area in profile.redraw_areas() {
                sink.redraw(area);
            }
            log::debug!("{} reached {:?}", tag.id.label(), reached);
        }
    }
}
