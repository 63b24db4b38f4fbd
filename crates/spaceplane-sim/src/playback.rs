//! Recorded-event decoding for playback.

use spaceplane_core::enums::{MechanismId, TransitionTarget};
use spaceplane_core::events::PlaybackEvent;
use spaceplane_rcs::autopilot::RCS_CONFIG_EVENT;

/// What a recorded event asks the vessel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Mechanism {
        id: MechanismId,
        target: TransitionTarget,
    },
    RcsDockingMode {
        docking: bool,
    },
}

/// Event types compare case-insensitively. Any event other than `CLOSE`
/// opens; any RCS event other than `DOCKING` selects Normal.
pub fn decode(event: &PlaybackEvent) -> Option<PlaybackAction> {
    let event_type = event.event_type.trim();
    let value = event.event.trim();

    if event_type.eq_ignore_ascii_case(RCS_CONFIG_EVENT) {
        return Some(PlaybackAction::RcsDockingMode {
            docking: value.eq_ignore_ascii_case("DOCKING"),
        });
    }

    let id = MechanismId::ALL
        .into_iter()
        .find(|id| id.scenario_key().eq_ignore_ascii_case(event_type))?;
    let target = if value.eq_ignore_ascii_case("CLOSE") {
        TransitionTarget::Closing
    } else {
        TransitionTarget::Opening
    };
    Some(PlaybackAction::Mechanism { id, target })
}
