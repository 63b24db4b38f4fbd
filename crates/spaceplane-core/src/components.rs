//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Mechanism logic lives in the controller and the engine systems.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Identifies which mechanism an entity represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MechanismTag {
    pub id: MechanismId,
}

/// Last status the door-sound system announced for this mechanism.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DoorSoundLatch {
    pub last_status: DoorStatus,
}
