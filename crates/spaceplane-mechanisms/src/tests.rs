#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use spaceplane_core::constants::*;
    use spaceplane_core::enums::*;
    use spaceplane_core::environment::Environment;
    use spaceplane_core::types::MechanismState;

    use crate::controller::*;
    use crate::interlock::*;
    use crate::profiles::get_profile;

    fn statuses(pairs: &[(MechanismId, DoorStatus)]) -> BTreeMap<MechanismId, DoorStatus> {
        pairs.iter().copied().collect()
    }

    // ---- Transition requests ----

    #[test]
    fn test_request_commits_and_keeps_progress() {
        let profile = get_profile(MechanismId::Hatch);
        let mut state = MechanismState::closed();
        let outcome = request_transition(
            &mut state,
            TransitionTarget::Opening,
            &profile,
            &statuses(&[]),
            &Environment::default(),
        );
        assert_eq!(outcome, TransitionOutcome::Committed { reversed: false });
        assert_eq!(state.status, DoorStatus::Opening);
        assert_eq!(state.progress, 0.0, "commit must not touch progress");
    }

    #[test]
    fn test_same_target_while_moving_is_noop() {
        let profile = get_profile(MechanismId::Hatch);
        let mut state = MechanismState::new(DoorStatus::Opening, 0.4);
        let outcome = request_transition(
            &mut state,
            TransitionTarget::Opening,
            &profile,
            &statuses(&[]),
            &Environment::default(),
        );
        assert_eq!(outcome, TransitionOutcome::AlreadyInProgress);
        assert!(outcome.is_allowed());
        assert_eq!(state, MechanismState::new(DoorStatus::Opening, 0.4));
    }

    #[test]
    fn test_reversal_keeps_progress_then_moves_back() {
        let profile = get_profile(MechanismId::Hatch);
        let mut state = MechanismState::new(DoorStatus::Opening, 0.6);
        let outcome = request_transition(
            &mut state,
            TransitionTarget::Closing,
            &profile,
            &statuses(&[]),
            &Environment::default(),
        );
        assert_eq!(outcome, TransitionOutcome::Committed { reversed: true });
        assert_eq!(state.status, DoorStatus::Closing);
        assert_eq!(state.progress, 0.6);

        advance_one_tick(&mut state, 0.3, HATCH_TRANSIT_SECS);
        assert!(state.progress < 0.6, "next tick must move toward closed");
    }

    #[test]
    fn test_failed_blocks_before_interlocks() {
        let profile = get_profile(MechanismId::Radiator);
        let mut state = MechanismState::new(DoorStatus::Failed, 0.3);
        // Bay doors moving would also block, but Failed is reported first.
        let others = statuses(&[(MechanismId::BayDoors, DoorStatus::Opening)]);
        let outcome = request_transition(
            &mut state,
            TransitionTarget::Opening,
            &profile,
            &others,
            &Environment::default(),
        );
        match outcome {
            TransitionOutcome::Blocked(BlockReason::Failed(w)) => {
                assert_eq!(w.sound, "Warning Radiator Failure");
            }
            other => panic!("expected Failed block, got {other:?}"),
        }
        assert_eq!(state.status, DoorStatus::Failed);
    }

    // ---- Interlocks ----

    #[test]
    fn test_radiator_blocked_while_bay_moving() {
        let profile = get_profile(MechanismId::Radiator);
        let mut state = MechanismState::closed();
        let others = statuses(&[(MechanismId::BayDoors, DoorStatus::Opening)]);
        let outcome = request_transition(
            &mut state,
            TransitionTarget::Opening,
            &profile,
            &others,
            &Environment::default(),
        );
        assert_eq!(
            outcome,
            TransitionOutcome::Blocked(BlockReason::Interlock(BAY_MOVING_LOCKS_RADIATOR))
        );
        assert_eq!(state, MechanismState::closed());
    }

    #[test]
    fn test_radiator_blocked_while_bay_open() {
        let profile = get_profile(MechanismId::Radiator);
        let mut state = MechanismState::closed();
        let others = statuses(&[(MechanismId::BayDoors, DoorStatus::Open)]);
        let outcome = request_transition(
            &mut state,
            TransitionTarget::Opening,
            &profile,
            &others,
            &Environment::default(),
        );
        assert_eq!(
            outcome,
            TransitionOutcome::Blocked(BlockReason::Interlock(BAY_OPEN_LOCKS_RADIATOR))
        );
    }

    #[test]
    fn test_interlock_symmetry_clears_once_terminal() {
        let bay = get_profile(MechanismId::BayDoors);
        let mut bay_state = MechanismState::closed();
        let moving = statuses(&[(MechanismId::Radiator, DoorStatus::Closing)]);
        let env = Environment::default();
        let blocked = request_transition(&mut bay_state, TransitionTarget::Opening, &bay, &moving, &env);
        assert!(!blocked.is_allowed());

        let settled = statuses(&[(MechanismId::Radiator, DoorStatus::Closed)]);
        let ok = request_transition(&mut bay_state, TransitionTarget::Opening, &bay, &settled, &env);
        assert_eq!(ok, TransitionOutcome::Committed { reversed: false });
    }

    #[test]
    fn test_radiator_rule_order_hydraulics_first() {
        let profile = get_profile(MechanismId::Radiator);
        let mut state = MechanismState::closed();
        let others = statuses(&[(MechanismId::BayDoors, DoorStatus::Opening)]);
        let env = Environment {
            hydraulic_pressure: false,
            ..Default::default()
        };
        let outcome = request_transition(&mut state, TransitionTarget::Opening, &profile, &others, &env);
        assert_eq!(
            outcome,
            TransitionOutcome::Blocked(BlockReason::Interlock(HYDRAULIC_PRESSURE_WARNING))
        );
    }

    #[test]
    fn test_elevator_ground_impact_guard() {
        let profile = get_profile(MechanismId::CrewElevator);
        let mut state = MechanismState::closed();
        let env = Environment {
            altitude_above_ground: GEAR_FULLY_COMPRESSED_DISTANCE - 0.5,
            ..Default::default()
        };
        let outcome = request_transition(&mut state, TransitionTarget::Opening, &profile, &statuses(&[]), &env);
        assert_eq!(
            outcome,
            TransitionOutcome::Blocked(BlockReason::Interlock(ELEVATOR_GROUND_IMPACT))
        );

        let env = Environment {
            altitude_above_ground: GEAR_FULLY_COMPRESSED_DISTANCE,
            ..Default::default()
        };
        let outcome = request_transition(&mut state, TransitionTarget::Opening, &profile, &statuses(&[]), &env);
        assert!(outcome.is_allowed());
    }

    #[test]
    fn test_gear_locked_while_compressed() {
        let profile = get_profile(MechanismId::LandingGear);
        let mut state = MechanismState::open();
        let env = Environment {
            nose_gear_uncompressed: 1.0,
            rear_gear_uncompressed: 0.9,
            ..Default::default()
        };
        let outcome = request_transition(&mut state, TransitionTarget::Closing, &profile, &statuses(&[]), &env);
        assert_eq!(
            outcome,
            TransitionOutcome::Blocked(BlockReason::Interlock(GEAR_ON_GROUND))
        );
        assert_eq!(state, MechanismState::open());
    }

    // ---- Ticking ----

    #[test]
    fn test_advance_reaches_endpoint_in_nominal_duration() {
        let mut state = MechanismState::new(DoorStatus::Opening, 0.0);
        let duration = 2.0;
        let dt = 0.25;
        let mut flipped_at = None;
        for i in 1..=8 {
            if let Some(s) = advance_one_tick(&mut state, dt, duration) {
                flipped_at = Some((i, s));
            }
            assert!((0.0..=1.0).contains(&state.progress));
        }
        assert_eq!(flipped_at, Some((8, DoorStatus::Open)));
        assert_eq!(state, MechanismState::open());
    }

    #[test]
    fn test_advance_clamps_overshoot() {
        let mut state = MechanismState::new(DoorStatus::Closing, 0.05);
        let flip = advance_one_tick(&mut state, 1.0, 3.0);
        assert_eq!(flip, Some(DoorStatus::Closed));
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_advance_noop_for_terminal_states() {
        for status in [DoorStatus::Open, DoorStatus::Closed, DoorStatus::Failed] {
            let mut state = MechanismState::new(status, 0.5);
            assert_eq!(advance_one_tick(&mut state, 1.0, 1.0), None);
            assert_eq!(state, MechanismState::new(status, 0.5));
        }
    }

    #[test]
    fn test_zero_duration_jumps_to_endpoint() {
        let mut state = MechanismState::new(DoorStatus::Opening, 0.2);
        assert_eq!(advance_one_tick(&mut state, DT, 0.0), Some(DoorStatus::Open));
    }

    // ---- Jump / fail / repair ----

    #[test]
    fn test_force_instant_jump_sets_exact_endpoint() {
        let mut state = MechanismState::new(DoorStatus::Closing, 0.37);
        force_instant_jump(&mut state, JumpTarget::Open);
        assert_eq!(state, MechanismState::open());
        force_instant_jump(&mut state, JumpTarget::Closed);
        assert_eq!(state, MechanismState::closed());
    }

    #[test]
    fn test_repair_settles_to_nearest_endpoint() {
        let mut state = MechanismState::new(DoorStatus::Opening, 0.7);
        set_failed(&mut state);
        assert_eq!(state.status, DoorStatus::Failed);
        assert!(repair(&mut state));
        assert_eq!(state, MechanismState::open());

        let mut state = MechanismState::new(DoorStatus::Failed, 0.2);
        assert!(repair(&mut state));
        assert_eq!(state, MechanismState::closed());

        assert!(!repair(&mut state), "repair of a healthy mechanism is a no-op");
    }

    #[test]
    fn test_toggle_target() {
        assert_eq!(toggle_target(DoorStatus::Closed), TransitionTarget::Opening);
        assert_eq!(toggle_target(DoorStatus::Closing), TransitionTarget::Opening);
        assert_eq!(toggle_target(DoorStatus::Open), TransitionTarget::Closing);
        assert_eq!(toggle_target(DoorStatus::Opening), TransitionTarget::Closing);
    }

    // ---- Profiles ----

    #[test]
    fn test_every_profile_is_consistent() {
        for id in MechanismId::ALL {
            let p = get_profile(id);
            assert_eq!(p.id, id);
            assert!(p.nominal_duration_secs > 0.0, "{id:?} needs a transit time");
            assert_eq!(p.event_name(), id.scenario_key());
            assert!(p.default_state.status.is_terminal());
        }
    }

    #[test]
    fn test_gear_defaults_deployed() {
        assert_eq!(get_profile(MechanismId::LandingGear).default_state, MechanismState::open());
        assert_eq!(get_profile(MechanismId::BayDoors).default_state, MechanismState::closed());
    }
}
