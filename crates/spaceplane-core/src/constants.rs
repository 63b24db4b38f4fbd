//! Simulation constants and tuning parameters.

/// Default tick rate (Hz) when the host does not supply its own frame dt.
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Mechanisms ---

/// Door-like mechanisms on the vessel.
pub const MECHANISM_COUNT: usize = 11;

// --- RCS ---

/// Physical RCS thrusters on the vessel.
pub const RCS_THRUSTER_COUNT: usize = 14;

/// Logical RCS axes (rotation + translation).
pub const RCS_LOGICAL_AXIS_COUNT: usize = 12;

/// Nominal max thrust of a single RCS thruster (N).
pub const RCS_NOMINAL_THRUST: f64 = 17_700.0;

/// Power fraction applied to every thruster in the docking layout.
pub const DOCKING_RCS_POWER_FRACTION: f64 = 0.40;

/// Power fraction applied to every thruster in the normal layout.
pub const NORMAL_RCS_POWER_FRACTION: f64 = 1.0;

/// RCS propellant fraction below which the low-fuel callout fires.
pub const RCS_FUEL_LOW_FRACTION: f64 = 0.10;

/// RCS propellant fraction above which the low-fuel callout re-arms.
pub const RCS_FUEL_REARM_FRACTION: f64 = 0.20;

// --- Ground clearance ---

/// Altitude above ground (m) with the gear struts fully compressed.
pub const GEAR_FULLY_COMPRESSED_DISTANCE: f64 = 3.2;

/// Margin below the compressed-gear altitude at which the elevator hits the ground (m).
pub const ELEVATOR_GROUND_CUSHION: f64 = 0.2;

/// Minimum altitude above ground for elevator operation (m).
pub const ELEVATOR_MIN_ALTITUDE: f64 = GEAR_FULLY_COMPRESSED_DISTANCE - ELEVATOR_GROUND_CUSHION;

// --- Mechanism transit times (seconds, fully closed to fully open) ---

pub const GEAR_TRANSIT_SECS: f64 = 12.0;
pub const RETRO_DOOR_TRANSIT_SECS: f64 = 3.3;
pub const HOVER_DOOR_TRANSIT_SECS: f64 = 5.0;
pub const SCRAM_DOOR_TRANSIT_SECS: f64 = 5.0;
pub const NOSECONE_TRANSIT_SECS: f64 = 13.0;
pub const AIRLOCK_TRANSIT_SECS: f64 = 10.0;
pub const HATCH_TRANSIT_SECS: f64 = 3.0;
pub const RADIATOR_TRANSIT_SECS: f64 = 30.0;
pub const BAY_DOOR_TRANSIT_SECS: f64 = 35.0;
pub const ELEVATOR_TRANSIT_SECS: f64 = 14.0;

// --- Dynamic pressure limits for open mechanisms (Pa) ---

pub const GEAR_MAX_DYNAMIC_PRESSURE: f64 = 36_000.0;
pub const RETRO_DOOR_MAX_DYNAMIC_PRESSURE: f64 = 32_000.0;
pub const HOVER_DOOR_MAX_DYNAMIC_PRESSURE: f64 = 36_000.0;
pub const SCRAM_DOOR_MAX_DYNAMIC_PRESSURE: f64 = 32_000.0;
pub const NOSECONE_MAX_DYNAMIC_PRESSURE: f64 = 32_000.0;
pub const AIRLOCK_MAX_DYNAMIC_PRESSURE: f64 = 32_000.0;
pub const HATCH_MAX_DYNAMIC_PRESSURE: f64 = 20_000.0;
pub const RADIATOR_MAX_DYNAMIC_PRESSURE: f64 = 16_000.0;
pub const BAY_DOOR_MAX_DYNAMIC_PRESSURE: f64 = 12_000.0;
pub const ELEVATOR_MAX_DYNAMIC_PRESSURE: f64 = 8_000.0;

// --- Mass ---

/// Dry mass of the vessel without payload (kg).
pub const DEFAULT_EMPTY_MASS: f64 = 60_000.0;

/// Payload bay slots.
pub const DEFAULT_PAYLOAD_SLOTS: usize = 36;

/// Progress at or above which a repaired mechanism settles Open.
pub const REPAIR_OPEN_THRESHOLD: f64 = 0.5;
