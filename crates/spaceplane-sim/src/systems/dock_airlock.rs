//! Selects the docking port as the active EVA port on docking.

use spaceplane_core::enums::ActiveEvaPort;
use spaceplane_core::environment::Environment;
use spaceplane_core::events::EventSink;

use crate::eva;

pub fn run(env: &Environment, was_docked: &mut bool, port: &mut ActiveEvaPort, sink: &mut impl EventSink) {
    if env.docked && !*was_docked && *port != ActiveEvaPort::DockingPort {
        eva::set_active_port(port, ActiveEvaPort::DockingPort, sink);
        log::info!("Docked: active EVA port set to docking port");
    }
    *was_docked = env.docked;
}
