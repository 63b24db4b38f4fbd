//! Engine-level error type.

use thiserror::Error;

use spaceplane_rcs::tables::LayoutError;

use crate::config::ConfigError;

/// Errors that prevent a `VesselEngine` from being built.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid RCS layout table: {0}")]
    Layout(#[from] LayoutError),
    #[error("invalid vessel configuration: {0}")]
    Config(#[from] ConfigError),
}
