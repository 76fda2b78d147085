use super::terms::buoyant_accel_y;
use super::types::{BreathInputs, DiveStepDebug, DiverState};
use crate::DiverPhysicsSpec;

/// Apply one tick of input-gated gas mass adjustment.
///
/// Pressure and reservoir volumes are refreshed from the current position
/// before the bound checks, so a grant is decided against this tick's
/// volumes. A granted adjustment can still overshoot a volume bound by one
/// tick's increment; the next tick then rejects further input. Mass may go
/// slightly negative on a final vent tick (unvalidated arithmetic).
pub fn apply_breathing(spec: &DiverPhysicsSpec, inputs: BreathInputs, state: &mut DiverState) {
    state.refresh_volumes(spec);

    if inputs.inhale {
        if state.lungs.volume < state.lungs.volume_max {
            state.lungs.mass += state.inhale_rate * state.pressure;
        }
    } else if state.lungs.volume > state.lungs.volume_min {
        // Passive exhale back toward resting volume.
        state.lungs.mass -= state.inhale_rate * state.pressure;
    }

    // Inflate and vent are independent gates; both may fire in one tick.
    if let (Some(bcd_spec), Some(bcd)) = (spec.bcd.as_ref(), state.bcd.as_mut()) {
        if inputs.inflate_bcd && bcd.volume < bcd.volume_max {
            bcd.mass += bcd_spec.pump_rate * state.pressure;
        }
        if inputs.vent_bcd && bcd.volume > bcd.volume_min {
            bcd.mass -= bcd_spec.pump_rate * state.pressure;
        }
    }
}

/// Recompute pressure and volumes from the current position and write the
/// net vertical acceleration into `state.gravity.y`. No clamping and no
/// position/velocity update; integration is the host's job. Idempotent for
/// fixed position and masses.
pub fn update_buoyancy(spec: &DiverPhysicsSpec, state: &mut DiverState) {
    state.refresh_volumes(spec);
    state.gravity.y = buoyant_accel_y(spec, state.weight, state.total_air_volume());
}

/// One host tick: breathing adjustment, then the buoyancy update.
/// See `step_diver_dbg` for the telemetry-filling variant.
pub fn step_diver(spec: &DiverPhysicsSpec, inputs: BreathInputs, state: &mut DiverState) {
    step_diver_dbg(spec, inputs, state, None);
}

/// Variant of `step_diver` that fills out an optional debug telemetry struct.
pub fn step_diver_dbg(
    spec: &DiverPhysicsSpec,
    inputs: BreathInputs,
    state: &mut DiverState,
    mut dbg: Option<&mut DiveStepDebug>,
) {
    apply_breathing(spec, inputs, state);
    update_buoyancy(spec, state);

    if let Some(d) = dbg.as_mut() {
        d.inputs = inputs;
        d.pressure = state.pressure;
        d.lung_mass = state.lungs.mass;
        d.lung_volume = state.lungs.volume;
        d.bcd_mass = state.bcd.map_or(0.0, |b| b.mass);
        d.bcd_volume = state.bcd.map_or(0.0, |b| b.volume);
        d.total_air_volume = state.total_air_volume();
        d.weight = state.weight;
        d.gravity_y = state.gravity.y;
        d.buoyant_term = state.gravity.y - state.weight;
    }
}
