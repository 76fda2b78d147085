use crate::{DiverPhysicsSpec, Vec2f};

use super::terms::{ambient_pressure_at_y, mass_from_volume, volume_from_mass};

/// A mass of compressible gas bounded by a volume range. `mass` is the only
/// persisted quantity; `volume` is always re-derived from mass and the
/// body's current pressure.
#[derive(Debug, Clone, Copy)]
pub struct GasReservoir {
    pub volume_min: f32,
    pub volume_max: f32,
    pub volume: f32,
    pub mass: f32,
}

/// Held-input booleans sampled once per tick by the host.
/// Releasing `inhale` is a passive exhale toward resting lung volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreathInputs {
    pub inhale: bool,
    pub inflate_bcd: bool,
    pub vent_bcd: bool,
}

/// Per-body simulation state. The host writes `position` and reads
/// `gravity`; everything else is owned by the physics step.
#[derive(Debug, Clone)]
pub struct DiverState {
    /// World position in pixels, +y down toward depth. Host-written.
    pub position: Vec2f,
    /// Constant downward acceleration term (px/s^2), runtime-tunable.
    pub weight: f32,
    /// Lung mass change per tick at 1 atm, runtime-tunable.
    pub inhale_rate: f32,
    /// Ambient pressure (atm) at `position.y`, recomputed each step.
    pub pressure: f32,
    pub lungs: GasReservoir,
    /// Present when the spec carries a buoyancy compensator.
    pub bcd: Option<GasReservoir>,
    /// Net acceleration output for the host integrator. Only `.y` is driven.
    pub gravity: Vec2f,
}

impl DiverState {
    /// Enable buoyancy on a body at `position`: lungs start at resting
    /// volume with pressure-matched mass (neutral-ish start), the BCD (if
    /// the spec has one) starts empty.
    pub fn new(spec: &DiverPhysicsSpec, position: Vec2f, weight: f32, inhale_rate: f32) -> Self {
        let pressure = ambient_pressure_at_y(spec, position.y);
        let lungs = GasReservoir {
            volume_min: spec.resting_lung_volume,
            volume_max: spec.max_inhale_lung_volume,
            volume: spec.resting_lung_volume,
            mass: mass_from_volume(spec.resting_lung_volume, pressure),
        };
        let bcd = spec.bcd.as_ref().map(|b| GasReservoir {
            volume_min: 0.0,
            volume_max: b.volume_max,
            volume: 0.0,
            mass: 0.0,
        });
        Self {
            position,
            weight,
            inhale_rate,
            pressure,
            lungs,
            bcd,
            gravity: Vec2f::ZERO,
        }
    }

    /// Sum of all carried gas volumes at the last computed pressure.
    pub fn total_air_volume(&self) -> f32 {
        self.lungs.volume + self.bcd.map_or(0.0, |b| b.volume)
    }

    pub(super) fn refresh_volumes(&mut self, spec: &DiverPhysicsSpec) {
        self.pressure = ambient_pressure_at_y(spec, self.position.y);
        self.lungs.volume = volume_from_mass(self.lungs.mass, self.pressure);
        if let Some(bcd) = self.bcd.as_mut() {
            bcd.volume = volume_from_mass(bcd.mass, self.pressure);
        }
    }
}

/// Flat per-step telemetry filled by `step_diver_dbg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiveStepDebug {
    pub inputs: BreathInputs,
    pub pressure: f32,
    pub lung_mass: f32,
    pub lung_volume: f32,
    pub bcd_mass: f32,
    pub bcd_volume: f32,
    pub total_air_volume: f32,
    pub weight: f32,
    /// Density-difference contribution alone (gravity_y minus weight).
    pub buoyant_term: f32,
    pub gravity_y: f32,
}
