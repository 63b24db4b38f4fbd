//! Core types and definitions for the SPACEPLANE vessel-systems simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! mechanism status, RCS layouts, commands, events, snapshots, the damage
//! record and the host-supplied environment. It has no dependency on the
//! host flight simulator or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod damage;
pub mod enums;
pub mod environment;
pub mod events;
pub mod state;
pub mod types;
