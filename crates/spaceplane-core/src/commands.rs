//! Commands sent from the host (panel, keyboard, playback) to the vessel.
//!
//! Commands are queued and applied at the start of the next tick, before
//! the Pre-step queue runs.

use serde::{Deserialize, Serialize};

use crate::damage::DamageItem;
use crate::enums::*;
use crate::events::PlaybackEvent;

/// All possible vessel-control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VesselCommand {
    // --- Mechanisms ---
    /// Drive a mechanism toward open or closed.
    RequestTransition {
        mechanism: MechanismId,
        target: TransitionTarget,
    },
    /// Key-handler entry point: open if closed/closing, else close.
    ToggleMechanism { mechanism: MechanismId },
    /// Host door-state write. Open/Closed jump instantly, Opening/Closing
    /// go through the normal request path.
    SetDoorState {
        mechanism: MechanismId,
        status: DoorStatus,
    },

    // --- RCS ---
    /// Host-facing docking-mode switch (refused while an autopilot is engaged).
    SetRcsDockingMode { docking: bool },
    ToggleRcsDockingMode,
    /// Standard navmode engaged or disengaged.
    SetNavMode { mode: NavMode, active: bool },
    SetCustomAutopilot { mode: CustomAutopilot },

    // --- EVA ---
    SetActiveEvaPort { port: ActiveEvaPort },

    // --- Damage ---
    SetDamage { item: DamageItem, integrity: f64 },

    // --- Payload ---
    /// Place a payload class in a bay slot, or empty it with `None`.
    SetPayloadSlot { slot: usize, class: Option<String> },

    // --- Playback ---
    /// Re-issue a recorded event through the live request path.
    Replay { event: PlaybackEvent },
}
