//! Mechanism operations over the world.
//!
//! Each function looks the mechanism up, runs the pure controller on its
//! components, and turns the result into sink notifications.

use std::collections::BTreeMap;

use hecs::World;

use spaceplane_core::components::{DoorSoundLatch, MechanismTag};
use spaceplane_core::enums::{DoorStatus, JumpTarget, MechanismId, TransitionTarget};
use spaceplane_core::environment::Environment;
use spaceplane_core::events::{EventSink, PlaybackEvent};
use spaceplane_core::types::MechanismState;
use spaceplane_mechanisms::controller::{self, TransitionOutcome};
use spaceplane_mechanisms::profiles::MechanismProfile;

use crate::world_setup::MechanismIndex;

/// Current status of every mechanism, for interlock evaluation.
pub fn statuses(world: &World) -> BTreeMap<MechanismId, DoorStatus> {
    world
        .query::<(&MechanismTag, &MechanismState)>()
        .iter()
        .map(|(_, (tag, state))| (tag.id, state.status))
        .collect()
}

pub fn state_of(world: &World, index: &MechanismIndex, id: MechanismId) -> Option<MechanismState> {
    let entity = *index.get(&id)?;
    world.get::<&MechanismState>(entity).ok().map(|s| *s)
}

pub fn profile_of(world: &World, index: &MechanismIndex, id: MechanismId) -> Option<MechanismProfile> {
    let entity = *index.get(&id)?;
    world.get::<&MechanismProfile>(entity).ok().map(|p| (*p).clone())
}

/// Live request path: interlocks, commit, redraw + playback record, or
/// error beep + warning when blocked.
pub fn request_transition(
    world: &mut World,
    index: &MechanismIndex,
    id: MechanismId,
    target: TransitionTarget,
    env: &Environment,
    sink: &mut impl EventSink,
) -> TransitionOutcome {
    let Some(&entity) = index.get(&id) else {
        return TransitionOutcome::Unsupported;
    };
    let others = statuses(world);
    let Ok((state, profile)) = world.query_one_mut::<(&mut MechanismState, &MechanismProfile)>(entity)
    else {
        return TransitionOutcome::Unsupported;
    };

    let outcome = controller::request_transition(state, target, profile, &others, env);
    match outcome {
        TransitionOutcome::Committed { reversed } => {
            for area in profile.redraw_areas() {
                sink.redraw(area);
            }
            sink.record(PlaybackEvent::new(profile.event_name(), target.event_token()));
            log::debug!("{} {:?} committed (reversed: {reversed})", id.label(), target);
        }
        TransitionOutcome::Blocked(reason) => {
            sink.warn(reason.warning());
            log::debug!("{} {:?} blocked: {}", id.label(), target, reason.warning().text);
        }
        TransitionOutcome::AlreadyInProgress | TransitionOutcome::Unsupported => {}
    }
    outcome
}

/// Key-handler entry point.
pub fn toggle(
    world: &mut World,
    index: &MechanismIndex,
    id: MechanismId,
    env: &Environment,
    sink: &mut impl EventSink,
) -> TransitionOutcome {
    let Some(state) = state_of(world, index, id) else {
        return TransitionOutcome::Unsupported;
    };
    let target = controller::toggle_target(state.status);
    request_transition(world, index, id, target, env, sink)
}

/// Instant jump to an endpoint. No interlocks, no playback record, no
/// motor sound. A Failed mechanism stays Failed.
pub fn force_instant_jump(
    world: &mut World,
    index: &MechanismIndex,
    id: MechanismId,
    target: JumpTarget,
    sink: &mut impl EventSink,
) -> bool {
    let Some(&entity) = index.get(&id) else {
        return false;
    };
    let Ok((state, latch, profile)) = world
        .query_one_mut::<(&mut MechanismState, &mut DoorSoundLatch, &MechanismProfile)>(entity)
    else {
        return false;
    };
    if state.is_failed() {
        return false;
    }
    controller::force_instant_jump(state, target);
    latch.last_status = state.status;
    for area in profile.redraw_areas() {
        sink.redraw(area);
    }
    true
}

/// Direct assignment used by scenario load. Bypasses every guard but still
/// redraws the mechanism's panel areas.
pub fn assign_state(
    world: &mut World,
    index: &MechanismIndex,
    id: MechanismId,
    value: MechanismState,
    sink: &mut impl EventSink,
) {
    let Some(&entity) = index.get(&id) else {
        return;
    };
    let Ok((state, latch, profile)) = world
        .query_one_mut::<(&mut MechanismState, &mut DoorSoundLatch, &MechanismProfile)>(entity)
    else {
        return;
    };
    *state = value;
    latch.last_status = value.status;
    for area in profile.redraw_areas() {
        sink.redraw(area);
    }
}

/// Damage subsystem: mark Failed and announce it.
pub fn set_failed(world: &mut World, index: &MechanismIndex, id: MechanismId, sink: &mut impl EventSink) -> bool {
    let Some(&entity) = index.get(&id) else {
        return false;
    };
    let Ok((state, profile)) = world.query_one_mut::<(&mut MechanismState, &MechanismProfile)>(entity)
    else {
        return false;
    };
    if state.is_failed() {
        return false;
    }
    controller::set_failed(state);
    sink.warn(&profile.failure_warning);
    for area in profile.redraw_areas() {
        sink.redraw(area);
    }
    log::warn!("{} failed", id.label());
    true
}

/// Damage subsystem: clear Failed to the nearest endpoint.
pub fn repair(world: &mut World, index: &MechanismIndex, id: MechanismId, sink: &mut impl EventSink) -> bool {
    let Some(&entity) = index.get(&id) else {
        return false;
    };
    let Ok((state, profile)) = world.query_one_mut::<(&mut MechanismState, &MechanismProfile)>(entity)
    else {
        return false;
    };
    if !controller::repair(state) {
        return false;
    }
    for area in profile.redraw_areas() {
        sink.redraw(area);
    }
    log::info!("{} repaired ({:?})", id.label(), state.status);
    true
}
