//! Door/mechanism state machines for SPACEPLANE.
//!
//! Implements the per-mechanism transition controller, the cross-mechanism
//! interlock rules, and the data-driven profiles that distinguish one
//! mechanism from another.

pub mod controller;
pub mod interlock;
pub mod profiles;

pub use spaceplane_core as core;

#[cfg(test)]
mod tests;
