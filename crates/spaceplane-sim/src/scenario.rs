//! Scenario persistence.
//!
//! Line format, one entry per line:
//!
//! ```text
//! BAYDOORS 3 0.37
//! GEAR 1 1
//! RCS_DOCKING_MODE 0
//! ACTIVE_EVA_PORT 1
//! ```
//!
//! Mechanism lines carry a status code and a progress fraction. Progress is
//! written with shortest round-trip float formatting, so a mid-transition
//! door reloads bit-for-bit.

use std::collections::BTreeMap;

use thiserror::Error;

use spaceplane_core::enums::{ActiveEvaPort, DoorStatus, MechanismId, RcsLayout};
use spaceplane_core::types::MechanismState;

pub const RCS_DOCKING_MODE_KEY: &str = "RCS_DOCKING_MODE";
pub const ACTIVE_EVA_PORT_KEY: &str = "ACTIVE_EVA_PORT";

/// A recognized key whose values could not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("{key}: missing value")]
    MissingValue { key: String },
    #[error("{key}: invalid status code `{value}`")]
    BadStatus { key: String, value: String },
    #[error("{key}: invalid progress `{value}`")]
    BadProgress { key: String, value: String },
    #[error("{key}: invalid flag `{value}`")]
    BadFlag { key: String, value: String },
}

/// One parsed, recognized line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioLine {
    Mechanism(MechanismId, MechanismState),
    RcsLayout(RcsLayout),
    ActiveEvaPort(ActiveEvaPort),
}

/// Persisted vessel-systems state. Mechanisms absent from a loaded file are
/// absent from `mechanisms`; the engine fills them from profile defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioState {
    pub mechanisms: BTreeMap<MechanismId, MechanismState>,
    pub rcs_layout: RcsLayout,
    pub active_eva_port: ActiveEvaPort,
}

impl ScenarioState {
    /// Lines in save order: mechanisms, then RCS mode, then EVA port.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .mechanisms
            .iter()
            .map(|(id, state)| write_mechanism(*id, state))
            .collect();
        let docking = u8::from(self.rcs_layout == RcsLayout::Docking);
        lines.push(format!("{RCS_DOCKING_MODE_KEY} {docking}"));
        lines.push(format!("{ACTIVE_EVA_PORT_KEY} {}", self.active_eva_port.code()));
        lines
    }

    /// Parses scenario lines. Unrecognized lines, and recognized lines with
    /// bad values, are handed to `fallback` untouched.
    pub fn parse<'a, I, F>(lines: I, mut fallback: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&str),
    {
        let mut state = Self::default();
        for line in lines {
            match parse_line(line) {
                None => fallback(line),
                Some(Err(e)) => {
                    log::warn!("Ignoring scenario line `{}`: {e}", line.trim());
                    fallback(line);
                }
                Some(Ok(ScenarioLine::Mechanism(id, value))) => {
                    state.mechanisms.insert(id, value);
                }
                Some(Ok(ScenarioLine::RcsLayout(layout))) => state.rcs_layout = layout,
                Some(Ok(ScenarioLine::ActiveEvaPort(port))) => state.active_eva_port = port,
            }
        }
        state
    }
}

pub fn write_mechanism(id: MechanismId, state: &MechanismState) -> String {
    format!("{} {} {}", id.scenario_key(), state.status.code(), state.progress)
}

/// `None` when the key is not ours.
pub fn parse_line(line: &str) -> Option<Result<ScenarioLine, ScenarioError>> {
    let mut tokens = line.split_whitespace();
    let key = tokens.next()?;

    if key == RCS_DOCKING_MODE_KEY {
        return Some(parse_flag(key, tokens.next()).map(|docking| {
            ScenarioLine::RcsLayout(if docking {
                RcsLayout::Docking
            } else {
                RcsLayout::Normal
            })
        }));
    }
    if key == ACTIVE_EVA_PORT_KEY {
        return Some(parse_flag(key, tokens.next()).map(|elevator| {
            ScenarioLine::ActiveEvaPort(if elevator {
                ActiveEvaPort::CrewElevator
            } else {
                ActiveEvaPort::DockingPort
            })
        }));
    }

    let id = MechanismId::from_scenario_key(key)?;
    Some(parse_mechanism(key, tokens.next(), tokens.next()).map(|s| ScenarioLine::Mechanism(id, s)))
}

fn parse_flag(key: &str, value: Option<&str>) -> Result<bool, ScenarioError> {
    match value {
        Some("0") => Ok(false),
        Some("1") => Ok(true),
        Some(other) => Err(ScenarioError::BadFlag {
            key: key.to_string(),
            value: other.to_string(),
        }),
        None => Err(ScenarioError::MissingValue { key: key.to_string() }),
    }
}

fn parse_mechanism(
    key: &str,
    status: Option<&str>,
    progress: Option<&str>,
) -> Result<MechanismState, ScenarioError> {
    let status_token = status.ok_or_else(|| ScenarioError::MissingValue { key: key.to_string() })?;
    let status = status_token
        .parse::<i32>()
        .ok()
        .and_then(DoorStatus::from_code)
        .ok_or_else(|| ScenarioError::BadStatus {
            key: key.to_string(),
            value: status_token.to_string(),
        })?;

    let progress = match progress {
        Some(token) => token
            .parse::<f64>()
            .ok()
            .filter(|p| (0.0..=1.0).contains(p))
            .ok_or_else(|| ScenarioError::BadProgress {
                key: key.to_string(),
                value: token.to_string(),
            })?,
        // Older files omit progress for doors at rest.
        None => match status {
            DoorStatus::Open => 1.0,
            DoorStatus::Closed | DoorStatus::Failed => 0.0,
            DoorStatus::Opening | DoorStatus::Closing => {
                return Err(ScenarioError::MissingValue { key: key.to_string() })
            }
        },
    };

    Ok(match status {
        DoorStatus::Open => MechanismState::open(),
        DoorStatus::Closed => MechanismState::closed(),
        _ => MechanismState::new(status, progress),
    })
}
