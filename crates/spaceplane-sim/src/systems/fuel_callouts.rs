//! RCS fuel-low warning.

use spaceplane_core::constants::{RCS_FUEL_LOW_FRACTION, RCS_FUEL_REARM_FRACTION};
use spaceplane_core::environment::Environment;
use spaceplane_core::events::{Callout, EventSink, Warning};

pub const RCS_FUEL_LOW: Warning = Warning {
    sound: "Warning RCS Fuel Low",
    text: "Warning: RCS fuel low.",
};

/// Fires once when fuel drops below the low mark; re-arms above the
/// re-arm mark.
pub fn run(env: &Environment, armed: &mut bool, sink: &mut impl EventSink) {
    let fraction = env.rcs_fuel_fraction;
    if *armed && fraction < RCS_FUEL_LOW_FRACTION {
        *armed = false;
        sink.callout(Callout::warning(&RCS_FUEL_LOW));
        log::warn!("RCS fuel low ({:.1}%)", fraction * 100.0);
    } else if !*armed && fraction > RCS_FUEL_REARM_FRACTION {
        *armed = true;
    }
}
