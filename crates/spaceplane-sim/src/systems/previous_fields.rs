//! Values carried from one tick to the next.

use spaceplane_core::environment::Environment;

/// Last tick's readings, for edge detection in the next Pre-step pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousFields {
    pub nose_gear_uncompressed: f64,
    pub rear_gear_uncompressed: f64,
}

impl Default for PreviousFields {
    fn default() -> Self {
        Self::capture(&Environment::default())
    }
}

impl PreviousFields {
    pub fn capture(env: &Environment) -> Self {
        Self {
            nose_gear_uncompressed: env.nose_gear_uncompressed,
            rear_gear_uncompressed: env.rear_gear_uncompressed,
        }
    }

    pub fn weight_on_wheels(&self) -> bool {
        self.nose_gear_uncompressed < 1.0 || self.rear_gear_uncompressed < 1.0
    }
}

/// Runs last among the Pre-steps.
pub fn run(env: &Environment, previous: &mut PreviousFields) {
    *previous = PreviousFields::capture(env);
}
