//! Motor start / stop sounds from status changes since the last pass.

use hecs::World;

use spaceplane_core::components::{DoorSoundLatch, MechanismTag};
use spaceplane_core::events::{AudioEvent, EventSink};
use spaceplane_core::types::MechanismState;

pub fn run(world: &mut World, sink: &mut impl EventSink) {
    let mut changes = Vec::new();
    for (_, (tag, state, latch)) in
        world.query_mut::<(&MechanismTag, &MechanismState, &mut DoorSoundLatch)>()
    {
        if latch.last_status == state.status {
            continue;
        }
        let was_moving = latch.last_status.is_moving();
        let moving = state.status.is_moving();
        if moving && !was_moving {
            changes.push((tag.id, AudioEvent::DoorMotorStart { mechanism: tag.id }));
        } else if was_moving && !moving {
            changes.push((tag.id, AudioEvent::DoorMotorStop { mechanism: tag.id }));
        }
        latch.last_status = state.status;
    }
    changes.sort_by_key(|(id, _)| *id);
    for (_, event) in changes {
        sink.play(event);
    }
}
