//! Damage-aware thrust scaling.

use spaceplane_core::constants::{DOCKING_RCS_POWER_FRACTION, NORMAL_RCS_POWER_FRACTION};
use spaceplane_core::enums::RcsLayout;

/// Atmosphere/payload-adjusted max thrust of one thruster.
///
/// `base_max × integrity`, further multiplied by the payload mass ratio
/// while an attitude-hold-class autopilot flies the vessel in atmosphere.
pub fn effective_max(
    base_max: f64,
    integrity: f64,
    in_atmosphere: bool,
    attitude_hold_active: bool,
    payload_mass_ratio: f64,
) -> f64 {
    let mut thrust = base_max * integrity.clamp(0.0, 1.0);
    if in_atmosphere && attitude_hold_active {
        thrust *= payload_mass_ratio.max(1.0);
    }
    thrust
}

/// `mass_with_payload / (mass_with_payload − payload_mass)`, never below 1.
pub fn payload_mass_ratio(mass_with_payload: f64, payload_mass: f64) -> f64 {
    let without = mass_with_payload - payload_mass;
    if without <= 0.0 || payload_mass <= 0.0 {
        return 1.0;
    }
    (mass_with_payload / without).max(1.0)
}

pub fn layout_power_fraction(layout: RcsLayout) -> f64 {
    match layout {
        RcsLayout::Normal => NORMAL_RCS_POWER_FRACTION,
        RcsLayout::Docking => DOCKING_RCS_POWER_FRACTION,
    }
}
