//! Payload mass and its effect on RCS authority.

use spaceplane_core::damage::DamageRecord;
use spaceplane_core::environment::Environment;
use spaceplane_rcs::autopilot::{RcsController, RcsEnvironment};
use spaceplane_rcs::scaler::payload_mass_ratio;

use crate::payload::{PayloadBay, PayloadRegistry};

/// Result of one mass update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassUpdate {
    pub payload_mass_kg: f64,
    pub payload_mass_ratio: f64,
}

pub fn run(
    bay: &PayloadBay,
    registry: Option<&PayloadRegistry>,
    empty_mass_kg: f64,
    env: &Environment,
    damage: &DamageRecord,
    rcs: &mut RcsController,
) -> MassUpdate {
    let payload_mass_kg = bay.mass(registry);
    let ratio = payload_mass_ratio(empty_mass_kg + payload_mass_kg, payload_mass_kg);
    rcs.reapply_limits(&RcsEnvironment {
        damage,
        in_atmosphere: env.in_atmosphere,
        payload_mass_ratio: ratio,
    });
    MassUpdate {
        payload_mass_kg,
        payload_mass_ratio: ratio,
    }
}
