use buoyancy::{step_diver_dbg, DiveStepDebug, DiverState, Vec2f};
use tracing::{debug, info};

use crate::{demo_script, overlay_lines, HostBody, SimConfig};

/// Flat end-of-run telemetry, logged by the binary and asserted on by the
/// end-to-end tests.
#[derive(Debug, Clone, Copy)]
pub struct DiveSummary {
    pub ticks: u64,
    pub final_depth: f32,
    pub max_depth: f32,
    pub min_depth: f32,
    pub final_x: f32,
    pub final_pressure: f32,
    pub final_lung_volume: f32,
    pub final_bcd_volume: Option<f32>,
}

/// Drive the model through a full scripted dive at a fixed tick rate.
pub fn run_sim(cfg: &SimConfig) -> DiveSummary {
    let spec = cfg.spec();
    let script = cfg
        .script
        .clone()
        .unwrap_or_else(|| demo_script(cfg.profile));

    let mut state = DiverState::new(
        &spec,
        Vec2f::new(cfg.start_x, cfg.start_y),
        cfg.weight,
        cfg.inhale_rate,
    );
    let mut host = HostBody::default();
    let mut dbg = DiveStepDebug::default();

    let dt = 1.0 / cfg.tick_hz as f32;
    let total_ticks = (cfg.seconds * cfg.tick_hz as f32).round() as u64;
    let bounds = Vec2f::new(cfg.world_width, cfg.world_height);
    let mut max_depth = state.position.y;
    let mut min_depth = state.position.y;

    for tick in 0..total_ticks {
        let time = tick as f32 * dt;
        let (inputs, swim) = script.inputs_at(time);
        step_diver_dbg(&spec, inputs, &mut state, Some(&mut dbg));
        host.integrate(&mut state, swim, dt, bounds);

        max_depth = max_depth.max(state.position.y);
        min_depth = min_depth.min(state.position.y);

        if tick % cfg.tick_hz as u64 == 0 {
            info!(
                time,
                depth = state.position.y,
                pressure = state.pressure,
                total_air = dbg.total_air_volume,
                net_accel = state.gravity.y,
                "dive tick"
            );
            for line in overlay_lines(&state, &host) {
                debug!("{line}");
            }
        }
    }

    DiveSummary {
        ticks: total_ticks,
        final_depth: state.position.y,
        max_depth,
        min_depth,
        final_x: state.position.x,
        final_pressure: state.pressure,
        final_lung_volume: state.lungs.volume,
        final_bcd_volume: state.bcd.map(|b| b.volume),
    }
}
