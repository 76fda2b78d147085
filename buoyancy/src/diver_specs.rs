use serde::{Deserialize, Serialize};

/// Fixed physics parameters for a diving body. Constructed once; runtime
/// tuning happens through the per-body fields on `DiverState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiverPhysicsSpec {
    pub water_density: f32,
    pub air_density: f32,
    pub resting_lung_volume: f32,
    pub max_inhale_lung_volume: f32,
    /// Vertical pixels per atmosphere of added pressure.
    pub pixels_per_atm: f32,
    /// Multiplier on the density-difference force term.
    pub gravity_constant: f32,
    /// Present when the body carries a buoyancy compensator.
    pub bcd: Option<BcdSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BcdSpec {
    /// Gas volume at which the bladder is full.
    pub volume_max: f32,
    /// Gas mass moved per tick at 1 atm by the inflator/vent.
    pub pump_rate: f32,
}

pub mod diverspecs {
    use super::*;

    // Imperial-ish units matching the original demo's tuning:
    // densities in lb/ft^3, volumes in ft^3, depth in screen pixels.
    fn base_spec() -> DiverPhysicsSpec {
        DiverPhysicsSpec {
            water_density: 64.0, // seawater, lb/ft^3
            air_density: 0.07,
            resting_lung_volume: 0.04, // ft^3, relaxed exhale
            max_inhale_lung_volume: 0.21,
            // 8 px/ft, ~33 ft of seawater per added atmosphere
            pixels_per_atm: 264.0,
            gravity_constant: 0.98,
            bcd: None,
        }
    }

    /// Breath-hold diver: lungs are the only gas reservoir.
    pub fn freediver_spec() -> DiverPhysicsSpec {
        base_spec()
    }

    /// Same body wearing a buoyancy compensator bladder.
    pub fn scuba_spec() -> DiverPhysicsSpec {
        let mut spec = base_spec();
        spec.bcd = Some(BcdSpec {
            volume_max: 0.21,
            pump_rate: 0.0001,
        });
        spec
    }
}
