//! Host-supplied per-tick inputs that interlock guards evaluate against.

use serde::{Deserialize, Serialize};

/// Flight state reported by the host before each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub in_atmosphere: bool,
    /// Altitude above ground (m), measured at the vessel's reference point.
    pub altitude_above_ground: f64,
    /// APU running and hydraulic lines pressurized.
    pub hydraulic_pressure: bool,
    /// Nose gear strut extension: 1.0 fully uncompressed, 0.0 fully compressed.
    pub nose_gear_uncompressed: f64,
    pub rear_gear_uncompressed: f64,
    /// Dynamic pressure (Pa).
    pub dynamic_pressure: f64,
    pub docked: bool,
    /// RCS propellant remaining as a fraction of capacity.
    pub rcs_fuel_fraction: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            in_atmosphere: false,
            altitude_above_ground: 100_000.0,
            hydraulic_pressure: true,
            nose_gear_uncompressed: 1.0,
            rear_gear_uncompressed: 1.0,
            dynamic_pressure: 0.0,
            docked: false,
            rcs_fuel_fraction: 1.0,
        }
    }
}

impl Environment {
    /// Both struts report no ground load.
    pub fn gear_fully_uncompressed(&self) -> bool {
        self.nose_gear_uncompressed >= 1.0 && self.rear_gear_uncompressed >= 1.0
    }

    /// At least one strut carries ground load.
    pub fn weight_on_wheels(&self) -> bool {
        !self.gear_fully_uncompressed()
    }
}
