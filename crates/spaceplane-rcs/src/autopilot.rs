//! RCS mode controller.
//!
//! Wraps the configurator with the rules that tie the RCS layout to the
//! autopilots: docking mode is refused while any autopilot flies the
//! vessel, engaging one reverts to Normal, and kill-rotation restores the
//! layout it interrupted.

use std::collections::BTreeSet;

use spaceplane_core::constants::RCS_THRUSTER_COUNT;
use spaceplane_core::damage::DamageRecord;
use spaceplane_core::enums::{CustomAutopilot, NavMode, RcsLayout};
use spaceplane_core::events::{AudioEvent, Callout, EventSink, PlaybackEvent, Warning};

use crate::configurator::{ThrustInputs, ThrusterGroupConfigurator};
use crate::tables::LayoutError;

pub const RCS_LOCKED_BY_AUTOPILOT: Warning = Warning {
    sound: "RCS locked by Autopilot",
    text: "Autopilot is active: RCS mode is locked.",
};

/// Playback event type for layout changes.
pub const RCS_CONFIG_EVENT: &str = "RCS_CONFIG";

/// Host-side inputs to thrust limits that the controller does not own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcsEnvironment<'a> {
    pub damage: &'a DamageRecord,
    pub in_atmosphere: bool,
    pub payload_mass_ratio: f64,
}

#[derive(Debug, Clone)]
pub struct RcsController {
    configurator: ThrusterGroupConfigurator,
    nav_modes: BTreeSet<NavMode>,
    custom: CustomAutopilot,
    /// Layout in force when kill-rotation engaged.
    killrot_saved_layout: RcsLayout,
}

impl RcsController {
    pub fn new(nominal_thrust: [f64; RCS_THRUSTER_COUNT]) -> Result<Self, LayoutError> {
        Ok(Self {
            configurator: ThrusterGroupConfigurator::new(nominal_thrust)?,
            nav_modes: BTreeSet::new(),
            custom: CustomAutopilot::Off,
            killrot_saved_layout: RcsLayout::Normal,
        })
    }

    pub fn configurator(&self) -> &ThrusterGroupConfigurator {
        &self.configurator
    }

    pub fn layout(&self) -> RcsLayout {
        self.configurator.layout()
    }

    pub fn custom_autopilot(&self) -> CustomAutopilot {
        self.custom
    }

    pub fn nav_modes(&self) -> impl Iterator<Item = NavMode> + '_ {
        self.nav_modes.iter().copied()
    }

    pub fn is_nav_mode_active(&self, mode: NavMode) -> bool {
        self.nav_modes.contains(&mode)
    }

    /// Any standard navmode or custom autopilot engaged.
    pub fn autopilot_engaged(&self) -> bool {
        !self.nav_modes.is_empty() || self.custom != CustomAutopilot::Off
    }

    fn inputs<'a>(&self, env: &RcsEnvironment<'a>) -> ThrustInputs<'a> {
        ThrustInputs {
            damage: env.damage,
            in_atmosphere: env.in_atmosphere,
            attitude_hold_active: self.custom.is_attitude_hold_class(),
            payload_mass_ratio: env.payload_mass_ratio,
        }
    }

    /// Direct layout switch, bypassing the autopilot lock.
    pub fn set_layout(&mut self, layout: RcsLayout, env: &RcsEnvironment, sink: &mut impl EventSink) {
        let inputs = self.inputs(env);
        self.configurator.set_layout(layout, &inputs, sink);
    }

    /// Recomputes thrust limits after damage, mass or atmosphere changes.
    pub fn reapply_limits(&mut self, env: &RcsEnvironment) {
        let inputs = self.inputs(env);
        self.configurator.reapply_limits(&inputs);
    }

    /// Host-facing docking-mode switch. Returns false when refused.
    pub fn request_docking_mode(
        &mut self,
        docking: bool,
        env: &RcsEnvironment,
        sink: &mut impl EventSink,
    ) -> bool {
        if docking && self.autopilot_engaged() {
            sink.warn(&RCS_LOCKED_BY_AUTOPILOT);
            return false;
        }

        let layout = if docking {
            RcsLayout::Docking
        } else {
            RcsLayout::Normal
        };
        self.set_layout(layout, env, sink);

        if docking {
            sink.play(AudioEvent::BeepHigh);
            sink.callout(Callout::info(
                "RCS Config Docking",
                "RCS jets set to DOCKING configuration.",
            ));
        } else {
            sink.play(AudioEvent::BeepLow);
            sink.callout(Callout::info(
                "RCS Config Normal",
                "RCS jets set to NORMAL configuration.",
            ));
        }
        sink.record(PlaybackEvent::new(RCS_CONFIG_EVENT, layout.event_token()));
        true
    }

    /// Host navmode change. Kill-rotation saves the layout on engage and
    /// restores it on disengage; any other engagement forces Normal.
    pub fn on_nav_mode(
        &mut self,
        mode: NavMode,
        active: bool,
        env: &RcsEnvironment,
        sink: &mut impl EventSink,
    ) {
        if active {
            if !self.nav_modes.insert(mode) {
                return;
            }
            if mode == NavMode::KillRot {
                self.killrot_saved_layout = self.layout();
            }
            self.set_layout(RcsLayout::Normal, env, sink);
        } else {
            if !self.nav_modes.remove(&mode) {
                return;
            }
            if mode == NavMode::KillRot {
                let restore = self.killrot_saved_layout;
                self.set_layout(restore, env, sink);
            }
        }
    }

    /// Custom autopilot change. Anything other than Off reverts to Normal.
    pub fn set_custom_autopilot(
        &mut self,
        mode: CustomAutopilot,
        env: &RcsEnvironment,
        sink: &mut impl EventSink,
    ) {
        self.custom = mode;
        if mode != CustomAutopilot::Off {
            self.set_layout(RcsLayout::Normal, env, sink);
        } else {
            self.reapply_limits(env);
        }
    }
}
