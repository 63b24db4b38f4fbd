//! Vessel-systems engine.
//!
//! `VesselEngine` owns the hecs world of mechanisms, processes host
//! commands, runs the Pre- and Post-step queues, and produces
//! `VesselSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use spaceplane_core::commands::VesselCommand;
use spaceplane_core::damage::{DamageItem, DamageRecord};
use spaceplane_core::enums::*;
use spaceplane_core::environment::Environment;
use spaceplane_core::events::{EventLog, EventSink, PlaybackEvent, RedrawArea};
use spaceplane_core::state::VesselSnapshot;
use spaceplane_core::types::{MechanismState, SimTime};
use spaceplane_mechanisms::controller::TransitionOutcome;
use spaceplane_rcs::autopilot::{RcsController, RcsEnvironment};

use crate::config::{ConfigError, SimConfig, VesselConfig};
use crate::error::SimError;
use crate::eva;
use crate::mechanisms;
use crate::payload::{PayloadBay, PayloadRegistry};
use crate::playback::{self, PlaybackAction};
use crate::scenario::ScenarioState;
use crate::steps::{self, PostStep, PreStep, StepQueue};
use crate::systems;
use crate::systems::mass::MassUpdate;
use crate::systems::previous_fields::PreviousFields;
use crate::world_setup::{self, MechanismIndex};

/// The vessel-systems engine. Owns the world and all per-vessel state.
pub struct VesselEngine {
    world: World,
    index: MechanismIndex,
    time: SimTime,
    dt: f64,
    vessel: VesselConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<VesselCommand>,
    events: EventLog,

    environment: Environment,
    previous: PreviousFields,
    damage: DamageRecord,
    rcs: RcsController,
    active_eva_port: ActiveEvaPort,

    payload_bay: PayloadBay,
    payloads: Option<Arc<PayloadRegistry>>,
    mass: MassUpdate,

    pre_steps: StepQueue<PreStep>,
    post_steps: StepQueue<PostStep>,
    fuel_warning_armed: bool,
    was_docked: bool,
}

/// RCS inputs built from disjoint engine fields.
fn rcs_env<'a>(damage: &'a DamageRecord, env: &Environment, mass: &MassUpdate) -> RcsEnvironment<'a> {
    RcsEnvironment {
        damage,
        in_atmosphere: env.in_atmosphere,
        payload_mass_ratio: mass.payload_mass_ratio,
    }
}

impl VesselEngine {
    /// Create a new engine. Fails on an invalid vessel config or an
    /// inconsistent RCS layout table.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        if !(config.dt > 0.0 && config.dt.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "dt".to_string(),
                expected: "> 0",
                value: config.dt,
            }
            .into());
        }
        config.vessel.validate()?;

        let mut world = World::new();
        let index = world_setup::spawn_mechanisms(&mut world, &config.vessel);
        let rcs = RcsController::new(config.vessel.rcs_nominal_thrust())?;
        let environment = Environment::default();

        log::info!(
            "Vessel {} ready: {} mechanisms, seed {}",
            config.vessel.name,
            index.len(),
            config.seed
        );

        Ok(Self {
            world,
            index,
            time: SimTime::default(),
            dt: config.dt,
            payload_bay: PayloadBay::new(config.vessel.payload_slots),
            vessel: config.vessel,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: EventLog::default(),
            previous: PreviousFields::capture(&environment),
            was_docked: environment.docked,
            environment,
            damage: DamageRecord::default(),
            rcs,
            active_eva_port: ActiveEvaPort::default(),
            payloads: None,
            mass: MassUpdate {
                payload_mass_kg: 0.0,
                payload_mass_ratio: 1.0,
            },
            pre_steps: steps::default_pre_steps(),
            post_steps: steps::default_post_steps(),
            fuel_warning_armed: true,
        })
    }

    /// Attach the shared payload class registry.
    pub fn with_payload_registry(mut self, registry: Arc<PayloadRegistry>) -> Self {
        self.payloads = Some(registry);
        self
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: VesselCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = VesselCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the host-supplied readings used from the next tick on.
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
        self.normalize_gear_struts();
    }

    /// Gear state may have changed since the environment was written.
    fn normalize_gear_struts(&mut self) {
        systems::gear_compression::normalize_struts(&self.world, &self.index, &mut self.environment);
    }

    /// Advance by the configured dt and return the resulting snapshot.
    pub fn tick(&mut self) -> VesselSnapshot {
        self.step(self.dt)
    }

    /// Advance by an explicit frame dt. Non-finite or negative dt runs the
    /// tick without advancing mechanisms.
    pub fn step(&mut self, dt: f64) -> VesselSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.process_commands();
        self.run_pre_steps(dt);
        self.run_post_steps(dt);
        self.time.advance(dt);

        let events = self.events.drain();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.damage,
            &self.rcs,
            self.active_eva_port,
            self.mass,
            events,
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn damage(&self) -> &DamageRecord {
        &self.damage
    }

    pub fn rcs(&self) -> &RcsController {
        &self.rcs
    }

    pub fn active_eva_port(&self) -> ActiveEvaPort {
        self.active_eva_port
    }

    pub fn payload_bay(&self) -> &PayloadBay {
        &self.payload_bay
    }

    pub fn pre_steps_mut(&mut self) -> &mut StepQueue<PreStep> {
        &mut self.pre_steps
    }

    pub fn post_steps_mut(&mut self) -> &mut StepQueue<PostStep> {
        &mut self.post_steps
    }

    // --- Mechanisms ---

    /// Live request path with interlocks, notifications and recording.
    pub fn request_transition(&mut self, id: MechanismId, target: TransitionTarget) -> TransitionOutcome {
        self.normalize_gear_struts();
        mechanisms::request_transition(
            &mut self.world,
            &self.index,
            id,
            target,
            &self.environment,
            &mut self.events,
        )
    }

    pub fn toggle_mechanism(&mut self, id: MechanismId) -> TransitionOutcome {
        self.normalize_gear_struts();
        mechanisms::toggle(&mut self.world, &self.index, id, &self.environment, &mut self.events)
    }

    pub fn force_instant_jump(&mut self, id: MechanismId, target: JumpTarget) -> bool {
        mechanisms::force_instant_jump(&mut self.world, &self.index, id, target, &mut self.events)
    }

    /// Host door-state write. Moving statuses go through the request path,
    /// terminal ones jump. Failed cannot be written.
    pub fn set_door_state(&mut self, id: MechanismId, status: DoorStatus) -> bool {
        match status {
            DoorStatus::Opening => self.request_transition(id, TransitionTarget::Opening).is_allowed(),
            DoorStatus::Closing => self.request_transition(id, TransitionTarget::Closing).is_allowed(),
            DoorStatus::Open => self.force_instant_jump(id, JumpTarget::Open),
            DoorStatus::Closed => self.force_instant_jump(id, JumpTarget::Closed),
            DoorStatus::Failed => {
                log::warn!("Refusing host write of Failed to {}; use SetDamage", id.label());
                false
            }
        }
    }

    pub fn door_state(&self, id: MechanismId) -> Option<MechanismState> {
        mechanisms::state_of(&self.world, &self.index, id)
    }

    // --- RCS ---

    pub fn set_rcs_docking_mode(&mut self, docking: bool) -> bool {
        let env = rcs_env(&self.damage, &self.environment, &self.mass);
        self.rcs.request_docking_mode(docking, &env, &mut self.events)
    }

    pub fn toggle_rcs_docking_mode(&mut self) -> bool {
        let docking = self.rcs.layout() != RcsLayout::Docking;
        self.set_rcs_docking_mode(docking)
    }

    pub fn set_nav_mode(&mut self, mode: NavMode, active: bool) {
        let env = rcs_env(&self.damage, &self.environment, &self.mass);
        self.rcs.on_nav_mode(mode, active, &env, &mut self.events);
    }

    pub fn set_custom_autopilot(&mut self, mode: CustomAutopilot) {
        let env = rcs_env(&self.damage, &self.environment, &self.mass);
        self.rcs.set_custom_autopilot(mode, &env, &mut self.events);
    }

    // --- EVA ---

    pub fn set_active_eva_port(&mut self, port: ActiveEvaPort) {
        eva::set_active_port(&mut self.active_eva_port, port, &mut self.events);
    }

    /// True when EVA through the active port is possible right now.
    pub fn check_eva_door(&mut self) -> bool {
        eva::check_eva_door(
            self.active_eva_port,
            &self.world,
            &self.index,
            &self.environment,
            &mut self.events,
        )
    }

    // --- Damage ---

    /// Integrity 0 fails a mechanism; any positive integrity repairs a
    /// Failed one. Thruster changes re-apply thrust limits.
    pub fn set_damage(&mut self, item: DamageItem, integrity: f64) -> bool {
        if self.damage.set(item, integrity).is_none() {
            log::warn!("Ignoring damage {integrity} for item {item:?}");
            return false;
        }
        match item {
            DamageItem::Mechanism(id) => {
                if self.damage.mechanism(id) <= 0.0 {
                    mechanisms::set_failed(&mut self.world, &self.index, id, &mut self.events);
                } else {
                    mechanisms::repair(&mut self.world, &self.index, id, &mut self.events);
                }
            }
            DamageItem::RcsThruster(_) => {
                let env = rcs_env(&self.damage, &self.environment, &self.mass);
                self.rcs.reapply_limits(&env);
            }
        }
        self.events.redraw(RedrawArea::DamageDisplay);
        true
    }

    // --- Payload ---

    pub fn set_payload_slot(&mut self, slot: usize, class: Option<String>) -> bool {
        if let Some(name) = class.as_deref() {
            let known = self.payloads.as_ref().is_some_and(|r| r.get(name).is_some());
            if !known {
                log::warn!("Payload class `{name}` is not registered; it will weigh nothing");
            }
        }
        if !self.payload_bay.set_slot(slot, class) {
            log::warn!("Payload slot {slot} does not exist");
            return false;
        }
        true
    }

    // --- Playback ---

    /// Replays a recorded event through the live request path. Returns
    /// false and logs a divergence when the vessel refuses it.
    pub fn replay(&mut self, event: &PlaybackEvent) -> bool {
        let Some(action) = playback::decode(event) else {
            log::warn!("Ignoring unknown playback event {} {}", event.event_type, event.event);
            return false;
        };
        let accepted = match action {
            PlaybackAction::Mechanism { id, target } => self.request_transition(id, target).is_allowed(),
            PlaybackAction::RcsDockingMode { docking } => self.set_rcs_docking_mode(docking),
        };
        if !accepted {
            log::warn!(
                "Playback divergence at tick {}: {} {} refused",
                self.time.tick,
                event.event_type,
                event.event
            );
        }
        accepted
    }

    // --- Scenario persistence ---

    pub fn scenario_state(&self) -> ScenarioState {
        ScenarioState {
            mechanisms: MechanismId::ALL
                .into_iter()
                .filter_map(|id| self.door_state(id).map(|s| (id, s)))
                .collect(),
            rcs_layout: self.rcs.layout(),
            active_eva_port: self.active_eva_port,
        }
    }

    pub fn save_scenario(&self) -> Vec<String> {
        self.scenario_state().to_lines()
    }

    /// Loads scenario lines by direct assignment. Lines that are not ours go
    /// to `fallback`. Mechanisms missing from the file take their defaults.
    pub fn load_scenario<'a, I, F>(&mut self, lines: I, fallback: F)
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&str),
    {
        let loaded = ScenarioState::parse(lines, fallback);
        self.apply_scenario(&loaded);
    }

    pub fn apply_scenario(&mut self, scenario: &ScenarioState) {
        for id in MechanismId::ALL {
            let value = match scenario.mechanisms.get(&id) {
                Some(value) => *value,
                None => match mechanisms::profile_of(&self.world, &self.index, id) {
                    Some(profile) => profile.default_state,
                    None => continue,
                },
            };
            mechanisms::assign_state(&mut self.world, &self.index, id, value, &mut self.events);
            let integrity = if value.is_failed() { 0.0 } else { 1.0 };
            self.damage.set(DamageItem::Mechanism(id), integrity);
        }
        self.set_active_eva_port(scenario.active_eva_port);

        let env = rcs_env(&self.damage, &self.environment, &self.mass);
        self.rcs.set_layout(scenario.rcs_layout, &env, &mut self.events);
        log::info!(
            "Scenario loaded: {} mechanism lines, RCS {:?}",
            scenario.mechanisms.len(),
            scenario.rcs_layout
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: VesselCommand) {
        match command {
            VesselCommand::RequestTransition { mechanism, target } => {
                self.request_transition(mechanism, target);
            }
            VesselCommand::ToggleMechanism { mechanism } => {
                self.toggle_mechanism(mechanism);
            }
            VesselCommand::SetDoorState { mechanism, status } => {
                self.set_door_state(mechanism, status);
            }
            VesselCommand::SetRcsDockingMode { docking } => {
                self.set_rcs_docking_mode(docking);
            }
            VesselCommand::ToggleRcsDockingMode => {
                self.toggle_rcs_docking_mode();
            }
            VesselCommand::SetNavMode { mode, active } => self.set_nav_mode(mode, active),
            VesselCommand::SetCustomAutopilot { mode } => self.set_custom_autopilot(mode),
            VesselCommand::SetActiveEvaPort { port } => self.set_active_eva_port(port),
            VesselCommand::SetDamage { item, integrity } => {
                self.set_damage(item, integrity);
            }
            VesselCommand::SetPayloadSlot { slot, class } => {
                self.set_payload_slot(slot, class);
            }
            VesselCommand::Replay { event } => {
                self.replay(&event);
            }
        }
    }

    /// Run the Pre-step queue in order.
    fn run_pre_steps(&mut self, dt: f64) {
        let queue = self.pre_steps.steps().to_vec();
        for step in queue {
            match step {
                // 1. Strut sanitizing, touchdown / liftoff
                PreStep::GearCompression => systems::gear_compression::run(
                    &self.world,
                    &self.index,
                    &mut self.environment,
                    &self.previous,
                    &mut self.events,
                ),
                // 2. Dynamic-pressure failure rolls
                PreStep::DoorStress => systems::door_stress::run(
                    &mut self.world,
                    &self.index,
                    &self.environment,
                    &mut self.damage,
                    &mut self.rng,
                    dt,
                    &mut self.events,
                ),
                // 3. Remember this tick's readings
                PreStep::UpdatePreviousFields => {
                    systems::previous_fields::run(&self.environment, &mut self.previous)
                }
            }
        }
    }

    /// Run the Post-step queue in order.
    fn run_post_steps(&mut self, dt: f64) {
        let queue = self.post_steps.steps().to_vec();
        for step in queue {
            match step {
                // 1. RCS fuel warning
                PostStep::FuelCallouts => systems::fuel_callouts::run(
                    &self.environment,
                    &mut self.fuel_warning_armed,
                    &mut self.events,
                ),
                // 2. Payload mass, RCS limits
                PostStep::UpdateMass => {
                    self.mass = systems::mass::run(
                        &self.payload_bay,
                        self.payloads.as_deref(),
                        self.vessel.empty_mass_kg,
                        &self.environment,
                        &self.damage,
                        &mut self.rcs,
                    );
                }
                // 3. Mechanism progress
                PostStep::Animation => systems::animation::run(&mut self.world, dt, &mut self.events),
                // 4. Motor sounds
                PostStep::DoorSounds => systems::door_sounds::run(&mut self.world, &mut self.events),
                // 5. Docking selects the docking port
                PostStep::DockChangeAirlock => systems::dock_airlock::run(
                    &self.environment,
                    &mut self.was_docked,
                    &mut self.active_eva_port,
                    &mut self.events,
                ),
            }
        }
    }
}
