//! Thruster group configurator.
//!
//! Owns the live logical-axis → thruster map and the per-thruster max
//! thrust. `set_layout` rebuilds both for a layout in a single `&mut`
//! call, so no observer ever sees a half-built map.

use std::collections::BTreeMap;

use glam::DVec3;
use spaceplane_core::constants::RCS_THRUSTER_COUNT;
use spaceplane_core::damage::DamageRecord;
use spaceplane_core::enums::{RcsLayout, ThrusterGroup};
use spaceplane_core::events::{EventSink, RedrawArea};

use crate::scaler::{effective_max, layout_power_fraction};
use crate::tables::{table, validate_tables, LayoutError};
use crate::thrusters::{net_force, net_torque, rcs_bank, ThrusterSpec};

/// Logical axis → ordered physical thruster indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThrusterGroupMap {
    groups: BTreeMap<ThrusterGroup, Vec<usize>>,
}

impl ThrusterGroupMap {
    pub fn for_layout(layout: RcsLayout) -> Self {
        let mut map = Self::default();
        for (group, thrusters) in table(layout) {
            map.create_group(*group, thrusters.to_vec());
        }
        map
    }

    /// Removes a group. Deleting a group that does not exist is a no-op.
    pub fn delete_group(&mut self, group: ThrusterGroup) -> Option<Vec<usize>> {
        self.groups.remove(&group)
    }

    pub fn create_group(&mut self, group: ThrusterGroup, thrusters: Vec<usize>) {
        self.groups.insert(group, thrusters);
    }

    pub fn thrusters(&self, group: ThrusterGroup) -> &[usize] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThrusterGroup, &[usize])> {
        self.groups.iter().map(|(g, t)| (*g, t.as_slice()))
    }
}

/// Everything besides the layout that feeds a thrust limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustInputs<'a> {
    pub damage: &'a DamageRecord,
    pub in_atmosphere: bool,
    pub attitude_hold_active: bool,
    pub payload_mass_ratio: f64,
}

#[derive(Debug, Clone)]
pub struct ThrusterGroupConfigurator {
    layout: RcsLayout,
    map: ThrusterGroupMap,
    nominal_thrust: [f64; RCS_THRUSTER_COUNT],
    thruster_max: [f64; RCS_THRUSTER_COUNT],
    bank: [ThrusterSpec; RCS_THRUSTER_COUNT],
}

impl ThrusterGroupConfigurator {
    /// Validates the static tables and starts in the Normal layout with
    /// undamaged, unscaled limits.
    pub fn new(nominal_thrust: [f64; RCS_THRUSTER_COUNT]) -> Result<Self, LayoutError> {
        validate_tables()?;
        Ok(Self {
            layout: RcsLayout::Normal,
            map: ThrusterGroupMap::for_layout(RcsLayout::Normal),
            nominal_thrust,
            thruster_max: nominal_thrust,
            bank: rcs_bank(),
        })
    }

    pub fn layout(&self) -> RcsLayout {
        self.layout
    }

    pub fn map(&self) -> &ThrusterGroupMap {
        &self.map
    }

    pub fn thruster_max(&self) -> &[f64; RCS_THRUSTER_COUNT] {
        &self.thruster_max
    }

    pub fn nominal_thrust(&self) -> &[f64; RCS_THRUSTER_COUNT] {
        &self.nominal_thrust
    }

    /// Rebuilds the group map for `layout`, recomputes every thruster
    /// limit, stores the layout and redraws the mode button.
    pub fn set_layout(&mut self, layout: RcsLayout, inputs: &ThrustInputs, sink: &mut impl EventSink) {
        let mut next = self.map.clone();
        for group in ThrusterGroup::ALL {
            next.delete_group(group);
        }
        for (group, thrusters) in table(layout) {
            next.create_group(*group, thrusters.to_vec());
        }
        self.map = next;

        self.layout = layout;
        self.reapply_limits(inputs);
        sink.redraw(RedrawArea::RcsModeButton);
        log::debug!("RCS layout set to {layout:?}");
    }

    /// Recomputes thrust limits for the current layout. Silent.
    pub fn reapply_limits(&mut self, inputs: &ThrustInputs) {
        let fraction = layout_power_fraction(self.layout);
        for (i, max) in self.thruster_max.iter_mut().enumerate() {
            let base = effective_max(
                self.nominal_thrust[i],
                inputs.damage.thruster(i),
                inputs.in_atmosphere,
                inputs.attitude_hold_active,
                inputs.payload_mass_ratio,
            );
            *max = base * fraction;
        }
    }

    /// Net force of a logical group at full deflection.
    pub fn group_force(&self, group: ThrusterGroup) -> DVec3 {
        net_force(&self.bank, self.map.thrusters(group), &self.thruster_max)
    }

    /// Net torque about the center of mass of a logical group at full deflection.
    pub fn group_torque(&self, group: ThrusterGroup) -> DVec3 {
        net_torque(&self.bank, self.map.thrusters(group), &self.thruster_max)
    }
}
