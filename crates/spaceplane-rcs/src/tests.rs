#[cfg(test)]
mod tests {
    use glam::DVec3;
    use spaceplane_core::constants::*;
    use spaceplane_core::damage::{DamageItem, DamageRecord};
    use spaceplane_core::enums::*;
    use spaceplane_core::events::{AudioEvent, EventLog, PlaybackEvent, RedrawArea};

    use crate::autopilot::*;
    use crate::configurator::*;
    use crate::tables::*;

    const NOMINAL: [f64; RCS_THRUSTER_COUNT] = [100.0; RCS_THRUSTER_COUNT];

    fn env(damage: &DamageRecord) -> RcsEnvironment<'_> {
        RcsEnvironment {
            damage,
            in_atmosphere: false,
            payload_mass_ratio: 1.0,
        }
    }

    fn inputs(damage: &DamageRecord) -> ThrustInputs<'_> {
        ThrustInputs {
            damage,
            in_atmosphere: false,
            attitude_hold_active: false,
            payload_mass_ratio: 1.0,
        }
    }

    fn points_along(v: DVec3, dir: DVec3) -> bool {
        (v.normalize_or_zero() - dir).length() < 1e-9
    }

    // ---- Tables ----

    #[test]
    fn test_builtin_tables_validate() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_missing_axis() {
        let partial = &NORMAL_TABLE[..11];
        assert_eq!(
            validate(RcsLayout::Normal, partial),
            Err(LayoutError::MissingGroup {
                layout: RcsLayout::Normal,
                group: ThrusterGroup::Back,
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_thruster_index() {
        let mut bad: Vec<(ThrusterGroup, &[usize])> = NORMAL_TABLE.to_vec();
        bad[0].1 = &[0, 14];
        let err = validate(RcsLayout::Normal, &bad).unwrap_err();
        assert!(matches!(err, LayoutError::ThrusterOutOfRange { index: 14, .. }));
    }

    #[test]
    fn test_validate_rejects_duplicate_axis() {
        let mut dup: Vec<(ThrusterGroup, &[usize])> = NORMAL_TABLE.to_vec();
        dup.push((ThrusterGroup::Up, &[0]));
        assert!(matches!(
            validate(RcsLayout::Normal, &dup),
            Err(LayoutError::DuplicateGroup { group: ThrusterGroup::Up, .. })
        ));
    }

    // ---- Configurator ----

    #[test]
    fn test_map_is_total_in_both_layouts() {
        for layout in [RcsLayout::Normal, RcsLayout::Docking] {
            let map = ThrusterGroupMap::for_layout(layout);
            assert_eq!(map.len(), RCS_LOGICAL_AXIS_COUNT);
            for group in ThrusterGroup::ALL {
                assert!(!map.thrusters(group).is_empty(), "{layout:?} {group:?} empty");
            }
        }
    }

    #[test]
    fn test_docking_swaps_translation_roles() {
        let normal = ThrusterGroupMap::for_layout(RcsLayout::Normal);
        let docking = ThrusterGroupMap::for_layout(RcsLayout::Docking);
        assert_eq!(docking.thrusters(ThrusterGroup::Forward), normal.thrusters(ThrusterGroup::Up));
        assert_eq!(docking.thrusters(ThrusterGroup::Back), normal.thrusters(ThrusterGroup::Down));
        assert_eq!(docking.thrusters(ThrusterGroup::Up), &[13]);
        assert_eq!(docking.thrusters(ThrusterGroup::Down), &[12]);
        assert_eq!(docking.thrusters(ThrusterGroup::YawLeft), &[8, 9]);
        assert_eq!(docking.thrusters(ThrusterGroup::BankRight), &[4, 5]);
    }

    #[test]
    fn test_docking_round_trip_restores_map_exactly() {
        let damage = DamageRecord::pristine();
        let mut c = ThrusterGroupConfigurator::new(NOMINAL).unwrap();
        let initial = c.map().clone();
        let mut log = EventLog::default();
        c.set_layout(RcsLayout::Docking, &inputs(&damage), &mut log);
        assert_ne!(c.map(), &initial);
        c.set_layout(RcsLayout::Normal, &inputs(&damage), &mut log);
        assert_eq!(c.map(), &initial);
        assert_eq!(c.thruster_max(), &NOMINAL);
    }

    #[test]
    fn test_set_layout_applies_power_fraction_and_redraws() {
        let damage = DamageRecord::pristine();
        let mut c = ThrusterGroupConfigurator::new(NOMINAL).unwrap();
        let mut log = EventLog::default();
        c.set_layout(RcsLayout::Docking, &inputs(&damage), &mut log);
        assert_eq!(c.layout(), RcsLayout::Docking);
        for max in c.thruster_max() {
            assert!((max - 40.0).abs() < 1e-9);
        }
        assert_eq!(log.redraws, vec![RedrawArea::RcsModeButton]);
        assert!(log.callouts.is_empty(), "set_layout itself is silent");
    }

    #[test]
    fn test_limits_scale_with_integrity() {
        let mut damage = DamageRecord::pristine();
        damage.set(DamageItem::RcsThruster(12), 0.5);
        let mut c = ThrusterGroupConfigurator::new(NOMINAL).unwrap();
        c.reapply_limits(&inputs(&damage));
        assert_eq!(c.thruster_max()[12], 50.0);
        assert_eq!(c.thruster_max()[13], 100.0);
    }

    #[test]
    fn test_group_force_directions() {
        let damage = DamageRecord::pristine();
        let mut c = ThrusterGroupConfigurator::new(NOMINAL).unwrap();
        assert!(points_along(c.group_force(ThrusterGroup::Up), DVec3::Y));
        assert!(points_along(c.group_force(ThrusterGroup::Forward), DVec3::Z));
        assert!(points_along(c.group_force(ThrusterGroup::Left), DVec3::NEG_X));
        assert_eq!(c.group_force(ThrusterGroup::PitchUp), DVec3::ZERO, "pure couple");

        let mut log = EventLog::default();
        c.set_layout(RcsLayout::Docking, &inputs(&damage), &mut log);
        assert!(points_along(c.group_force(ThrusterGroup::Forward), DVec3::Y));
        assert!(points_along(c.group_force(ThrusterGroup::Up), DVec3::NEG_Z));
    }

    #[test]
    fn test_rotation_groups_produce_torque() {
        let c = ThrusterGroupConfigurator::new(NOMINAL).unwrap();
        for group in ThrusterGroup::ALL.into_iter().filter(|g| g.is_rotation()) {
            assert!(c.group_torque(group).length() > 0.0, "{group:?} has no torque");
        }
    }

    // ---- Autopilot guard ----

    #[test]
    fn test_docking_refused_while_autopilot_engaged() {
        let damage = DamageRecord::pristine();
        let mut rcs = RcsController::new(NOMINAL).unwrap();
        let mut log = EventLog::default();
        rcs.on_nav_mode(NavMode::Prograde, true, &env(&damage), &mut log);
        let mut log = EventLog::default();

        assert!(!rcs.request_docking_mode(true, &env(&damage), &mut log));
        assert_eq!(rcs.layout(), RcsLayout::Normal);
        assert_eq!(log.audio, vec![AudioEvent::ErrorBeep]);
        assert_eq!(log.callouts[0].text, RCS_LOCKED_BY_AUTOPILOT.text);
        assert!(log.recorded.is_empty());
    }

    #[test]
    fn test_docking_request_success_callouts() {
        let damage = DamageRecord::pristine();
        let mut rcs = RcsController::new(NOMINAL).unwrap();
        let mut log = EventLog::default();
        assert!(rcs.request_docking_mode(true, &env(&damage), &mut log));
        assert_eq!(rcs.layout(), RcsLayout::Docking);
        assert_eq!(log.audio, vec![AudioEvent::BeepHigh]);
        assert_eq!(log.callouts[0].text, "RCS jets set to DOCKING configuration.");
        assert_eq!(log.recorded, vec![PlaybackEvent::new("RCS_CONFIG", "DOCKING")]);

        let mut log = EventLog::default();
        assert!(rcs.request_docking_mode(false, &env(&damage), &mut log));
        assert_eq!(log.audio, vec![AudioEvent::BeepLow]);
    }

    #[test]
    fn test_custom_autopilot_reverts_to_normal() {
        let damage = DamageRecord::pristine();
        let mut rcs = RcsController::new(NOMINAL).unwrap();
        let mut log = EventLog::default();
        rcs.request_docking_mode(true, &env(&damage), &mut log);
        rcs.set_custom_autopilot(CustomAutopilot::AirspeedHold, &env(&damage), &mut log);
        assert_eq!(rcs.layout(), RcsLayout::Normal);
        assert!(rcs.autopilot_engaged());
    }

    #[test]
    fn test_killrot_saves_and_restores_layout() {
        let damage = DamageRecord::pristine();
        let mut rcs = RcsController::new(NOMINAL).unwrap();
        let mut log = EventLog::default();
        rcs.request_docking_mode(true, &env(&damage), &mut log);

        rcs.on_nav_mode(NavMode::KillRot, true, &env(&damage), &mut log);
        assert_eq!(rcs.layout(), RcsLayout::Normal);
        assert!(rcs.is_nav_mode_active(NavMode::KillRot));

        rcs.on_nav_mode(NavMode::KillRot, false, &env(&damage), &mut log);
        assert_eq!(rcs.layout(), RcsLayout::Docking);
        assert!(!rcs.autopilot_engaged());
    }

    #[test]
    fn test_attitude_hold_in_atmosphere_boosts_limits() {
        let damage = DamageRecord::pristine();
        let mut rcs = RcsController::new(NOMINAL).unwrap();
        let heavy = RcsEnvironment {
            damage: &damage,
            in_atmosphere: true,
            payload_mass_ratio: 1.25,
        };
        let mut log = EventLog::default();
        rcs.set_custom_autopilot(CustomAutopilot::AttitudeHold, &heavy, &mut log);
        assert!((rcs.configurator().thruster_max()[0] - 125.0).abs() < 1e-9);

        rcs.set_custom_autopilot(CustomAutopilot::Off, &heavy, &mut log);
        assert_eq!(rcs.configurator().thruster_max()[0], 100.0);
    }
}
