//! Static logical-axis to physical-thruster tables.
//!
//! Physical thruster indices:
//!
//! | idx | location | force |
//! |---|---|---|
//! | 0 | fore, up | +Y at nose |
//! | 1 | aft, down | −Y at tail |
//! | 2 | fore, down | −Y at nose |
//! | 3 | aft, up | +Y at tail |
//! | 4 | fore, left | −X at nose |
//! | 5 | aft, right | +X at tail |
//! | 6 | fore, right | +X at nose |
//! | 7 | aft, left | −X at tail |
//! | 8 | right wing, bottom | +Y at right tip |
//! | 9 | left wing, top | −Y at left tip |
//! | 10 | left wing, bottom | +Y at left tip |
//! | 11 | right wing, top | −Y at right tip |
//! | 12 | aft | +Z |
//! | 13 | fore | −Z |
//!
//! The docking table swaps the Y and Z roles so translation follows the
//! nose docking port: old −Z becomes new up, old +Y becomes new forward.

use spaceplane_core::constants::{RCS_LOGICAL_AXIS_COUNT, RCS_THRUSTER_COUNT};
use spaceplane_core::enums::{RcsLayout, ThrusterGroup};
use thiserror::Error;

pub type LayoutTable = [(ThrusterGroup, &'static [usize]); RCS_LOGICAL_AXIS_COUNT];

pub const NORMAL_TABLE: LayoutTable = [
    (ThrusterGroup::PitchUp, &[0, 1]),
    (ThrusterGroup::PitchDown, &[2, 3]),
    (ThrusterGroup::Up, &[0, 3]),
    (ThrusterGroup::Down, &[2, 1]),
    (ThrusterGroup::YawLeft, &[4, 5]),
    (ThrusterGroup::YawRight, &[6, 7]),
    (ThrusterGroup::Left, &[4, 7]),
    (ThrusterGroup::Right, &[6, 5]),
    (ThrusterGroup::BankLeft, &[8, 9]),
    (ThrusterGroup::BankRight, &[10, 11]),
    (ThrusterGroup::Forward, &[12]),
    (ThrusterGroup::Back, &[13]),
];

pub const DOCKING_TABLE: LayoutTable = [
    (ThrusterGroup::PitchUp, &[0, 1]),
    (ThrusterGroup::PitchDown, &[2, 3]),
    (ThrusterGroup::Forward, &[0, 3]),
    (ThrusterGroup::Back, &[2, 1]),
    (ThrusterGroup::BankRight, &[4, 5]),
    (ThrusterGroup::BankLeft, &[6, 7]),
    (ThrusterGroup::Left, &[4, 7]),
    (ThrusterGroup::Right, &[6, 5]),
    (ThrusterGroup::YawLeft, &[8, 9]),
    (ThrusterGroup::YawRight, &[10, 11]),
    (ThrusterGroup::Down, &[12]),
    (ThrusterGroup::Up, &[13]),
];

pub fn table(layout: RcsLayout) -> &'static LayoutTable {
    match layout {
        RcsLayout::Normal => &NORMAL_TABLE,
        RcsLayout::Docking => &DOCKING_TABLE,
    }
}

/// A static table that does not map every axis exactly once.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{layout:?} layout has no entry for {group:?}")]
    MissingGroup {
        layout: RcsLayout,
        group: ThrusterGroup,
    },
    #[error("{layout:?} layout maps {group:?} more than once")]
    DuplicateGroup {
        layout: RcsLayout,
        group: ThrusterGroup,
    },
    #[error("{layout:?} layout maps {group:?} to no thrusters")]
    EmptyGroup {
        layout: RcsLayout,
        group: ThrusterGroup,
    },
    #[error("{layout:?} layout maps {group:?} to thruster {index}, only {count} exist")]
    ThrusterOutOfRange {
        layout: RcsLayout,
        group: ThrusterGroup,
        index: usize,
        count: usize,
    },
}

/// Checks that `entries` maps every logical axis exactly once to a
/// non-empty set of existing thrusters.
pub fn validate(layout: RcsLayout, entries: &[(ThrusterGroup, &[usize])]) -> Result<(), LayoutError> {
    for group in ThrusterGroup::ALL {
        let mut hits = entries.iter().filter(|(g, _)| *g == group);
        let Some((_, thrusters)) = hits.next() else {
            return Err(LayoutError::MissingGroup { layout, group });
        };
        if hits.next().is_some() {
            return Err(LayoutError::DuplicateGroup { layout, group });
        }
        if thrusters.is_empty() {
            return Err(LayoutError::EmptyGroup { layout, group });
        }
        if let Some(&index) = thrusters.iter().find(|&&i| i >= RCS_THRUSTER_COUNT) {
            return Err(LayoutError::ThrusterOutOfRange {
                layout,
                group,
                index,
                count: RCS_THRUSTER_COUNT,
            });
        }
    }
    Ok(())
}

/// Validates both built-in tables.
pub fn validate_tables() -> Result<(), LayoutError> {
    validate(RcsLayout::Normal, &NORMAL_TABLE)?;
    validate(RcsLayout::Docking, &DOCKING_TABLE)
}
