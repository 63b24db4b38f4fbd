//! Vessel state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, Callout, PlaybackEvent, RedrawArea};
use crate::types::SimTime;

/// Complete vessel-systems state after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VesselSnapshot {
    pub time: SimTime,
    pub mechanisms: Vec<MechanismView>,
    pub rcs: RcsView,
    pub active_eva_port: ActiveEvaPort,
    pub custom_autopilot: CustomAutopilot,
    pub nav_modes: Vec<NavMode>,
    /// Mass with payload divided by mass without payload.
    pub payload_mass_ratio: f64,
    pub payload_mass_kg: f64,
    pub redraws: Vec<RedrawArea>,
    pub audio_events: Vec<AudioEvent>,
    pub callouts: Vec<Callout>,
    pub recorded_events: Vec<PlaybackEvent>,
}

/// One mechanism on the panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanismView {
    pub id: MechanismId,
    pub status: DoorStatus,
    pub progress: f64,
    pub integrity: f64,
}

/// RCS configuration as the host sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RcsView {
    pub layout: RcsLayout,
    pub groups: Vec<ThrusterGroupView>,
    /// Max thrust per physical thruster (N), index-aligned.
    pub thruster_max: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrusterGroupView {
    pub group: ThrusterGroup,
    pub thrusters: Vec<usize>,
}

impl VesselSnapshot {
    pub fn mechanism(&self, id: MechanismId) -> Option<&MechanismView> {
        self.mechanisms.iter().find(|m| m.id == id)
    }
}
