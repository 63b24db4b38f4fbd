//! Engine and vessel configuration.
//!
//! `VesselConfig` is read from TOML: a default file first, then an
//! optional per-vessel override file whose tables are merged key by key
//! on top of it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spaceplane_core::constants::*;
use spaceplane_core::enums::MechanismId;
use spaceplane_mechanisms::profiles::{get_profile, MechanismProfile};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown mechanism key `{0}`")]
    UnknownMechanism(String),
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: String,
        expected: &'static str,
        value: f64,
    },
    #[error("RCS thruster index {0} does not exist")]
    UnknownThruster(usize),
}

/// Configuration for starting a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same door-stress rolls.
    pub seed: u64,
    /// Frame dt used by `tick()` (seconds).
    pub dt: f64,
    pub vessel: VesselConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dt: DT,
            vessel: VesselConfig::default(),
        }
    }
}

/// Per-vessel tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VesselConfig {
    pub name: String,
    /// Dry mass without payload (kg).
    pub empty_mass_kg: f64,
    /// Nominal max thrust for every RCS thruster (N).
    pub rcs_nominal_thrust_n: f64,
    pub rcs_thrust_overrides: Vec<ThrusterOverride>,
    /// Keyed by scenario key, e.g. `[mechanisms.BAYDOORS]`.
    pub mechanisms: BTreeMap<String, MechanismOverride>,
    pub payload_slots: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThrusterOverride {
    pub index: usize,
    pub thrust_n: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MechanismOverride {
    pub transit_secs: Option<f64>,
    pub max_dynamic_pressure_pa: Option<f64>,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            name: "XR3".to_string(),
            empty_mass_kg: DEFAULT_EMPTY_MASS,
            rcs_nominal_thrust_n: RCS_NOMINAL_THRUST,
            rcs_thrust_overrides: Vec::new(),
            mechanisms: BTreeMap::new(),
            payload_slots: DEFAULT_PAYLOAD_SLOTS,
        }
    }
}

impl VesselConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: VesselConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `default_path`, then layers `override_path` on top if given.
    pub fn load(default_path: &Path, override_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut merged = read_table(default_path)?;
        if let Some(path) = override_path {
            let overlay = read_table(path)?;
            merge_tables(&mut merged, overlay);
            log::info!("Applied vessel config override {}", path.display());
        }
        let config: VesselConfig = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("empty_mass_kg", self.empty_mass_kg)?;
        non_negative("rcs_nominal_thrust_n", self.rcs_nominal_thrust_n)?;
        for o in &self.rcs_thrust_overrides {
            if o.index >= RCS_THRUSTER_COUNT {
                return Err(ConfigError::UnknownThruster(o.index));
            }
            non_negative("rcs_thrust_overrides.thrust_n", o.thrust_n)?;
        }
        for (key, o) in &self.mechanisms {
            if MechanismId::from_scenario_key(key).is_none() {
                return Err(ConfigError::UnknownMechanism(key.clone()));
            }
            if let Some(secs) = o.transit_secs {
                positive(&format!("mechanisms.{key}.transit_secs"), secs)?;
            }
            if let Some(q) = o.max_dynamic_pressure_pa {
                positive(&format!("mechanisms.{key}.max_dynamic_pressure_pa"), q)?;
            }
        }
        Ok(())
    }

    /// Nominal thrust per thruster after overrides.
    pub fn rcs_nominal_thrust(&self) -> [f64; RCS_THRUSTER_COUNT] {
        let mut thrust = [self.rcs_nominal_thrust_n; RCS_THRUSTER_COUNT];
        for o in &self.rcs_thrust_overrides {
            if let Some(slot) = thrust.get_mut(o.index) {
                *slot = o.thrust_n;
            }
        }
        thrust
    }

    /// Built-in profile with this vessel's overrides applied.
    pub fn profile(&self, id: MechanismId) -> MechanismProfile {
        let mut profile = get_profile(id);
        if let Some(o) = self.mechanisms.get(id.scenario_key()) {
            if let Some(secs) = o.transit_secs {
                profile.nominal_duration_secs = secs;
            }
            if let Some(q) = o.max_dynamic_pressure_pa {
                profile.max_dynamic_pressure = Some(q);
            }
        }
        profile
    }
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.parse::<toml::Table>()?)
}

/// Recursively merges `overlay` into `base`. Tables merge key by key;
/// every other value (arrays included) is replaced.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            expected: "positive",
            value,
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            expected: "non-negative",
            value,
        })
    }
}
