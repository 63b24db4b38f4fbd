//! Physical RCS thruster geometry in the vessel frame.
//!
//! +X right, +Y up, +Z forward (nose). Positions in meters from the center
//! of mass; `direction` is the unit force the thruster applies.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use spaceplane_core::constants::RCS_THRUSTER_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrusterSpec {
    pub index: usize,
    pub position: DVec3,
    pub direction: DVec3,
}

const NOSE_Z: f64 = 15.0;
const TAIL_Z: f64 = -15.0;
const WING_X: f64 = 19.0;

/// The fixed RCS bank. Index order matches the layout tables.
pub fn rcs_bank() -> [ThrusterSpec; RCS_THRUSTER_COUNT] {
    let spec = |index: usize, position: DVec3, direction: DVec3| ThrusterSpec {
        index,
        position,
        direction,
    };
    [
        spec(0, DVec3::new(0.0, 0.0, NOSE_Z), DVec3::Y),
        spec(1, DVec3::new(0.0, 0.0, TAIL_Z), DVec3::NEG_Y),
        spec(2, DVec3::new(0.0, 0.0, NOSE_Z), DVec3::NEG_Y),
        spec(3, DVec3::new(0.0, 0.0, TAIL_Z), DVec3::Y),
        spec(4, DVec3::new(0.0, 0.0, NOSE_Z), DVec3::NEG_X),
        spec(5, DVec3::new(0.0, 0.0, TAIL_Z), DVec3::X),
        spec(6, DVec3::new(0.0, 0.0, NOSE_Z), DVec3::X),
        spec(7, DVec3::new(0.0, 0.0, TAIL_Z), DVec3::NEG_X),
        spec(8, DVec3::new(WING_X, 0.0, 0.0), DVec3::Y),
        spec(9, DVec3::new(-WING_X, 0.0, 0.0), DVec3::NEG_Y),
        spec(10, DVec3::new(-WING_X, 0.0, 0.0), DVec3::Y),
        spec(11, DVec3::new(WING_X, 0.0, 0.0), DVec3::NEG_Y),
        spec(12, DVec3::new(0.0, 0.0, TAIL_Z), DVec3::Z),
        spec(13, DVec3::new(0.0, 0.0, NOSE_Z), DVec3::NEG_Z),
    ]
}

/// Sum of `direction × max_thrust` over the listed thrusters.
pub fn net_force(bank: &[ThrusterSpec], thrusters: &[usize], max_thrust: &[f64]) -> DVec3 {
    thrusters
        .iter()
        .filter_map(|&i| Some(bank.get(i)?.direction * max_thrust.get(i).copied()?))
        .fold(DVec3::ZERO, |acc, f| acc + f)
}

/// Sum of `position × force` over the listed thrusters.
pub fn net_torque(bank: &[ThrusterSpec], thrusters: &[usize], max_thrust: &[f64]) -> DVec3 {
    thrusters
        .iter()
        .filter_map(|&i| {
            let spec = bank.get(i)?;
            let thrust = max_thrust.get(i).copied()?;
            Some(spec.position.cross(spec.direction * thrust))
        })
        .fold(DVec3::ZERO, |acc, t| acc + t)
}
