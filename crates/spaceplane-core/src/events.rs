//! Events emitted by the simulation for the host's panel, audio and
//! playback recorder.
//!
//! Everything here is fire-and-forget: the simulation never waits on the
//! host to act on a redraw, sound or record.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Named panel area the host should repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedrawArea {
    MechanismSwitch(MechanismId),
    MechanismIndicator(MechanismId),
    RcsModeButton,
    DockingPortEvaLed,
    CrewElevatorEvaLed,
    ActiveEvaPortSwitch,
    DamageDisplay,
}

/// Audio events for the host sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Short "locked" signal for a refused request.
    ErrorBeep,
    BeepHigh,
    BeepLow,
    /// Hydraulic motor started driving a mechanism.
    DoorMotorStart { mechanism: MechanismId },
    /// Mechanism reached an endpoint.
    DoorMotorStop { mechanism: MechanismId },
}

/// Static warning text paired with its voice cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warning {
    pub sound: &'static str,
    pub text: &'static str,
}

/// Voice callout with its on-screen text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub level: AlertLevel,
    pub sound: String,
    pub text: String,
}

impl Callout {
    pub fn info(sound: &str, text: &str) -> Self {
        Self {
            level: AlertLevel::Info,
            sound: sound.to_string(),
            text: text.to_string(),
        }
    }

    pub fn warning(warning: &Warning) -> Self {
        Self {
            level: AlertLevel::Warning,
            sound: warning.sound.to_string(),
            text: warning.text.to_string(),
        }
    }
}

/// Playback recorder entry, e.g. `("ELEVATOR", "OPEN")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackEvent {
    pub event_type: String,
    pub event: String,
}

impl PlaybackEvent {
    pub fn new(event_type: &str, event: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            event: event.to_string(),
        }
    }
}

/// Narrow interface to the host's panel, audio and recorder.
pub trait EventSink {
    fn redraw(&mut self, area: RedrawArea);
    fn play(&mut self, sound: AudioEvent);
    fn callout(&mut self, callout: Callout);
    fn record(&mut self, event: PlaybackEvent);

    /// Refused request: error beep plus the warning callout.
    fn warn(&mut self, warning: &Warning) {
        self.play(AudioEvent::ErrorBeep);
        self.callout(Callout::warning(warning));
    }
}

/// Buffered sink drained into each tick's snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    pub redraws: Vec<RedrawArea>,
    pub audio: Vec<AudioEvent>,
    pub callouts: Vec<Callout>,
    pub recorded: Vec<PlaybackEvent>,
}

impl EventLog {
    pub fn is_empty(&self) -> bool {
        self.redraws.is_empty()
            && self.audio.is_empty()
            && self.callouts.is_empty()
            && self.recorded.is_empty()
    }

    /// Takes everything buffered so far, leaving the log empty.
    pub fn drain(&mut self) -> EventLog {
        std::mem::take(self)
    }
}

impl EventSink for EventLog {
    fn redraw(&mut self, area: RedrawArea) {
        self.redraws.push(area);
    }

    fn play(&mut self, sound: AudioEvent) {
        self.audio.push(sound);
    }

    fn callout(&mut self, callout: Callout) {
        self.callouts.push(callout);
    }

    fn record(&mut self, event: PlaybackEvent) {
        self.recorded.push(event);
    }
}
