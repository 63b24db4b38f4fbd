//! Integrity fractions for every damageable component.

use serde::{Deserialize, Serialize};

use crate::constants::{MECHANISM_COUNT, RCS_THRUSTER_COUNT};
use crate::enums::MechanismId;

/// Something the damage subsystem can degrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum DamageItem {
    Mechanism(MechanismId),
    RcsThruster(usize),
}

/// Integrity in [0, 1] for each mechanism and each RCS thruster.
/// 0 is destroyed, 1 is pristine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRecord {
    mechanisms: [f64; MECHANISM_COUNT],
    rcs_thrusters: [f64; RCS_THRUSTER_COUNT],
}

impl Default for DamageRecord {
    fn default() -> Self {
        Self::pristine()
    }
}

impl DamageRecord {
    pub fn pristine() -> Self {
        Self {
            mechanisms: [1.0; MECHANISM_COUNT],
            rcs_thrusters: [1.0; RCS_THRUSTER_COUNT],
        }
    }

    pub fn mechanism(&self, id: MechanismId) -> f64 {
        self.mechanisms[id.index()]
    }

    /// Integrity of thruster `index`; out-of-range indices read as destroyed.
    pub fn thruster(&self, index: usize) -> f64 {
        self.rcs_thrusters.get(index).copied().unwrap_or(0.0)
    }

    pub fn get(&self, item: DamageItem) -> f64 {
        match item {
            DamageItem::Mechanism(id) => self.mechanism(id),
            DamageItem::RcsThruster(index) => self.thruster(index),
        }
    }

    /// Stores the clamped integrity and returns the previous value, or
    /// `None` when the item does not exist or `integrity` is not finite.
    pub fn set(&mut self, item: DamageItem, integrity: f64) -> Option<f64> {
        if !integrity.is_finite() {
            return None;
        }
        let slot = match item {
            DamageItem::Mechanism(id) => &mut self.mechanisms[id.index()],
            DamageItem::RcsThruster(index) => self.rcs_thrusters.get_mut(index)?,
        };
        let previous = *slot;
        *slot = integrity.clamp(0.0, 1.0);
        Some(previous)
    }

    pub fn is_pristine(&self) -> bool {
        self.mechanisms
            .iter()
            .chain(self.rcs_thrusters.iter())
            .all(|&v| v >= 1.0)
    }
}
