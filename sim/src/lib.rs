//! Headless dive-tank harness for the buoyancy model.
//!
//! Stands in for the host game engine: fixed-tick loop, scripted held keys,
//! Euler integration of the model's acceleration output, and world-bounds
//! clamping. The model itself never integrates or clamps.

mod args;
pub use args::Args;

mod config;
pub use config::{load_config, ConfigError, Profile, SimConfig};

mod script;
pub use script::{demo_script, DiveScript, ScriptPhase};

mod host;
pub use host::HostBody;

mod overlay;
pub use overlay::overlay_lines;

mod run;
pub use run::{run_sim, DiveSummary};
