mod types;
mod terms;
mod dynamics;

pub use dynamics::{apply_breathing, step_diver, step_diver_dbg, update_buoyancy};
pub use terms::{ambient_pressure_at_y, mass_from_volume, volume_from_mass};
pub use types::{BreathInputs, DiveStepDebug, DiverState, GasReservoir};
