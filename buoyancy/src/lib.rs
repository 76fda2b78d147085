//! Buoyancy model for a body carrying compressible gas in water.
//!
//! This crate intentionally avoids any engine types. It exposes a small,
//! pure physics core a headless harness can drive tick-by-tick and a game
//! client could equally translate into sprite accelerations. Positions are
//! in pixels with +y pointing down toward depth; pressure is in atmospheres.

mod math;
pub use math::Vec2f;

pub mod water_physics;
pub use water_physics::{
    ambient_pressure_at_y, apply_breathing, mass_from_volume, step_diver, step_diver_dbg,
    update_buoyancy, volume_from_mass, BreathInputs, DiveStepDebug, DiverState, GasReservoir,
};

mod diver_specs;
pub use diver_specs::diverspecs;
pub use diver_specs::{BcdSpec, DiverPhysicsSpec};

mod readout;
pub use readout::Readout;
