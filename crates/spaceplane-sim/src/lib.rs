//! Vessel-systems engine for SPACEPLANE.
//!
//! Owns the hecs world of mechanisms, applies queued commands, runs the
//! Pre- and Post-step queues each tick, and produces `VesselSnapshot`s for
//! the host. Completely headless, enabling deterministic testing.

pub mod config;
pub mod engine;
pub mod error;
pub mod eva;
pub mod mechanisms;
pub mod payload;
pub mod playback;
pub mod scenario;
pub mod steps;
pub mod systems;
pub mod world_setup;

pub use engine::VesselEngine;
pub use spaceplane_core as core;
