use buoyancy::BreathInputs;
use serde::Deserialize;

use crate::Profile;

/// One stretch of held keys. Unset fields read as released.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptPhase {
    pub secs: f32,
    #[serde(default)]
    pub inhale: bool,
    #[serde(default)]
    pub inflate_bcd: bool,
    #[serde(default)]
    pub vent_bcd: bool,
    /// Horizontal swim direction in [-1, 1] (arrow keys in the source).
    #[serde(default)]
    pub swim: f32,
}

/// Scripted stand-in for a player holding keys. Past the last phase the
/// script reads as everything released.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiveScript {
    pub phases: Vec<ScriptPhase>,
}

impl DiveScript {
    pub fn phase_at(&self, time: f32) -> Option<&ScriptPhase> {
        let mut start = 0.0f32;
        for phase in &self.phases {
            if time < start + phase.secs {
                return Some(phase);
            }
            start += phase.secs;
        }
        None
    }

    /// Held-input sample and swim direction at `time`.
    pub fn inputs_at(&self, time: f32) -> (BreathInputs, f32) {
        match self.phase_at(time) {
            Some(p) => (
                BreathInputs {
                    inhale: p.inhale,
                    inflate_bcd: p.inflate_bcd,
                    vent_bcd: p.vent_bcd,
                },
                p.swim,
            ),
            None => (BreathInputs::default(), 0.0),
        }
    }
}

/// Built-in demo profile: sink on resting lungs, breathe up, then trim with
/// the BCD where the profile has one.
pub fn demo_script(profile: Profile) -> DiveScript {
    let phases = match profile {
        Profile::Freedive => vec![
            ScriptPhase {
                secs: 6.0,
                inhale: false,
                inflate_bcd: false,
                vent_bcd: false,
                swim: 0.0,
            },
            ScriptPhase {
                secs: 8.0,
                inhale: true,
                inflate_bcd: false,
                vent_bcd: false,
                swim: 1.0,
            },
            ScriptPhase {
                secs: 6.0,
                inhale: false,
                inflate_bcd: false,
                vent_bcd: false,
                swim: -1.0,
            },
        ],
        Profile::Scuba => vec![
            ScriptPhase {
                secs: 4.0,
                inhale: false,
                inflate_bcd: false,
                vent_bcd: false,
                swim: 0.0,
            },
            ScriptPhase {
                secs: 10.0,
                inhale: false,
                inflate_bcd: true,
                vent_bcd: false,
                swim: 0.0,
            },
            ScriptPhase {
                secs: 8.0,
                inhale: false,
                inflate_bcd: false,
                vent_bcd: false,
                swim: 1.0,
            },
            ScriptPhase {
                secs: 8.0,
                inhale: false,
                inflate_bcd: false,
                vent_bcd: true,
                swim: 0.0,
            },
        ],
    };
    DiveScript { phases }
}
