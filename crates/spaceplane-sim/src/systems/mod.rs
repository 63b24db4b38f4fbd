//! Per-tick vessel systems.
//!
//! Systems are plain functions over the world and the engine's side
//! state. They do not own state; the engine passes in what each one needs.

pub mod animation;
pub mod dock_airlock;
pub mod door_sounds;
pub mod door_stress;
pub mod fuel_callouts;
pub mod gear_compression;
pub mod mass;
pub mod previous_fields;
pub mod snapshot;
