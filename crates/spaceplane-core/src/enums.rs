//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Status of a door-like mechanism.
///
/// The numeric codes are the persisted scenario representation and must not
/// change: Closed=0, Open=1, Closing=2, Opening=3, Failed=4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorStatus {
    #[default]
    Closed,
    Open,
    Closing,
    Opening,
    /// Damaged. Only the damage subsystem sets or clears this.
    Failed,
}

impl DoorStatus {
    /// Persisted status code.
    pub fn code(self) -> i32 {
        match self {
            DoorStatus::Closed => 0,
            DoorStatus::Open => 1,
            DoorStatus::Closing => 2,
            DoorStatus::Opening => 3,
            DoorStatus::Failed => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(DoorStatus::Closed),
            1 => Some(DoorStatus::Open),
            2 => Some(DoorStatus::Closing),
            3 => Some(DoorStatus::Opening),
            4 => Some(DoorStatus::Failed),
            _ => None,
        }
    }

    /// True while the mechanism is travelling (Closing or Opening).
    pub fn is_moving(self) -> bool {
        matches!(self, DoorStatus::Closing | DoorStatus::Opening)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_moving()
    }
}

/// Direction of a requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionTarget {
    Opening,
    Closing,
}

impl TransitionTarget {
    /// The moving status a committed request assigns.
    pub fn status(self) -> DoorStatus {
        match self {
            TransitionTarget::Opening => DoorStatus::Opening,
            TransitionTarget::Closing => DoorStatus::Closing,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            TransitionTarget::Opening => TransitionTarget::Closing,
            TransitionTarget::Closing => TransitionTarget::Opening,
        }
    }

    /// Playback event token ("OPEN" / "CLOSE").
    pub fn event_token(self) -> &'static str {
        match self {
            TransitionTarget::Opening => "OPEN",
            TransitionTarget::Closing => "CLOSE",
        }
    }
}

/// Endpoint for an instantaneous jump that bypasses the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpTarget {
    Open,
    Closed,
}

impl JumpTarget {
    pub fn status(self) -> DoorStatus {
        match self {
            JumpTarget::Open => DoorStatus::Open,
            JumpTarget::Closed => DoorStatus::Closed,
        }
    }

    pub fn progress(self) -> f64 {
        match self {
            JumpTarget::Open => 1.0,
            JumpTarget::Closed => 0.0,
        }
    }
}

/// Every door-like mechanism on the vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MechanismId {
    LandingGear,
    RetroDoors,
    HoverDoors,
    ScramDoors,
    NoseCone,
    OuterAirlock,
    InnerAirlock,
    Hatch,
    Radiator,
    BayDoors,
    CrewElevator,
}

impl MechanismId {
    pub const ALL: [MechanismId; crate::constants::MECHANISM_COUNT] = [
        MechanismId::LandingGear,
        MechanismId::RetroDoors,
        MechanismId::HoverDoors,
        MechanismId::ScramDoors,
        MechanismId::NoseCone,
        MechanismId::OuterAirlock,
        MechanismId::InnerAirlock,
        MechanismId::Hatch,
        MechanismId::Radiator,
        MechanismId::BayDoors,
        MechanismId::CrewElevator,
    ];

    /// Dense index into per-mechanism arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Scenario-file key, also used as the playback event type.
    pub fn scenario_key(self) -> &'static str {
        match self {
            MechanismId::LandingGear => "GEAR",
            MechanismId::RetroDoors => "RCOVER",
            MechanismId::HoverDoors => "HOVERDOORS",
            MechanismId::ScramDoors => "SCRAMDOORS",
            MechanismId::NoseCone => "NOSECONE",
            MechanismId::OuterAirlock => "AIRLOCK",
            MechanismId::InnerAirlock => "IAIRLOCK",
            MechanismId::Hatch => "HATCH",
            MechanismId::Radiator => "RADIATOR",
            MechanismId::BayDoors => "BAYDOORS",
            MechanismId::CrewElevator => "ELEVATOR",
        }
    }

    pub fn from_scenario_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.scenario_key() == key)
    }

    /// Human-readable name for callouts and logs.
    pub fn label(self) -> &'static str {
        match self {
            MechanismId::LandingGear => "Landing gear",
            MechanismId::RetroDoors => "Retro doors",
            MechanismId::HoverDoors => "Hover doors",
            MechanismId::ScramDoors => "SCRAM doors",
            MechanismId::NoseCone => "Nosecone",
            MechanismId::OuterAirlock => "Outer airlock door",
            MechanismId::InnerAirlock => "Inner airlock door",
            MechanismId::Hatch => "Top hatch",
            MechanismId::Radiator => "Radiator",
            MechanismId::BayDoors => "Bay doors",
            MechanismId::CrewElevator => "Crew elevator",
        }
    }
}

/// Logical-to-physical RCS thruster mapping in force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RcsLayout {
    #[default]
    Normal,
    /// Y and Z translation roles swapped for docking through the nose port.
    Docking,
}

impl RcsLayout {
    /// Playback event token.
    pub fn event_token(self) -> &'static str {
        match self {
            RcsLayout::Normal => "NORMAL",
            RcsLayout::Docking => "DOCKING",
        }
    }
}

/// Logical RCS axis. Each layout maps all twelve to physical thrusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThrusterGroup {
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    BankLeft,
    BankRight,
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
}

impl ThrusterGroup {
    pub const ALL: [ThrusterGroup; crate::constants::RCS_LOGICAL_AXIS_COUNT] = [
        ThrusterGroup::PitchUp,
        ThrusterGroup::PitchDown,
        ThrusterGroup::YawLeft,
        ThrusterGroup::YawRight,
        ThrusterGroup::BankLeft,
        ThrusterGroup::BankRight,
        ThrusterGroup::Up,
        ThrusterGroup::Down,
        ThrusterGroup::Left,
        ThrusterGroup::Right,
        ThrusterGroup::Forward,
        ThrusterGroup::Back,
    ];

    pub fn is_rotation(self) -> bool {
        matches!(
            self,
            ThrusterGroup::PitchUp
                | ThrusterGroup::PitchDown
                | ThrusterGroup::YawLeft
                | ThrusterGroup::YawRight
                | ThrusterGroup::BankLeft
                | ThrusterGroup::BankRight
        )
    }
}

/// Standard host navmode autopilots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NavMode {
    /// Kill rotation. Saves and restores the RCS layout around its activation.
    KillRot,
    HorizonLevel,
    Prograde,
    Retrograde,
    OrbitNormal,
    OrbitAntiNormal,
    HoldAltitude,
}

impl NavMode {
    pub const ALL: [NavMode; 7] = [
        NavMode::KillRot,
        NavMode::HorizonLevel,
        NavMode::Prograde,
        NavMode::Retrograde,
        NavMode::OrbitNormal,
        NavMode::OrbitAntiNormal,
        NavMode::HoldAltitude,
    ];
}

/// Vessel-specific autopilots layered on top of the host navmodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomAutopilot {
    #[default]
    Off,
    AttitudeHold,
    DescentHold,
    AirspeedHold,
}

impl CustomAutopilot {
    /// Attitude-hold-class modes fly the RCS and get payload mass compensation.
    pub fn is_attitude_hold_class(self) -> bool {
        matches!(self, CustomAutopilot::AttitudeHold | CustomAutopilot::DescentHold)
    }
}

/// Which mechanism acts as the airlock for EVA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveEvaPort {
    #[default]
    DockingPort,
    CrewElevator,
}

impl ActiveEvaPort {
    pub fn code(self) -> i32 {
        match self {
            ActiveEvaPort::DockingPort => 0,
            ActiveEvaPort::CrewElevator => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ActiveEvaPort::DockingPort),
            1 => Some(ActiveEvaPort::CrewElevator),
            _ => None,
        }
    }

    /// Mechanism that gates EVA through this port.
    pub fn airlock_mechanism(self) -> MechanismId {
        match self {
            ActiveEvaPort::DockingPort => MechanismId::OuterAirlock,
            ActiveEvaPort::CrewElevator => MechanismId::CrewElevator,
        }
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
}
