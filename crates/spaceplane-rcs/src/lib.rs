//! RCS thruster-group reconfiguration for SPACEPLANE.
//!
//! Static layout tables, the group configurator that swaps them in
//! atomically, the autopilot guard that reverts docking mode, and the
//! damage-aware thrust scaler.

pub mod autopilot;
pub mod configurator;
pub mod scaler;
pub mod tables;
pub mod thrusters;

pub use spaceplane_core as core;

#[cfg(test)]
mod tests;
