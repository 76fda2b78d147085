use crate::DiverState;

/// Named debug-overlay channels. A fixed enumeration instead of reflective
/// field-path lookup: each channel knows its display label and how to read
/// itself out of a `DiverState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    Pressure,
    LungMass,
    LungVolume,
    BcdMass,
    BcdVolume,
    GravityY,
}

impl Readout {
    pub const ALL: [Readout; 6] = [
        Readout::LungMass,
        Readout::LungVolume,
        Readout::Pressure,
        Readout::GravityY,
        Readout::BcdMass,
        Readout::BcdVolume,
    ];

    /// Dotted field names as the original overlay displayed them.
    pub fn label(self) -> &'static str {
        match self {
            Readout::Pressure => "pressure",
            Readout::LungMass => "lungs.mass",
            Readout::LungVolume => "lungs.volume.current",
            Readout::BcdMass => "bcd.mass",
            Readout::BcdVolume => "bcd.volume.current",
            Readout::GravityY => "gravity.y",
        }
    }

    /// `None` for BCD channels on a body that carries no compensator.
    pub fn sample(self, state: &DiverState) -> Option<f32> {
        match self {
            Readout::Pressure => Some(state.pressure),
            Readout::LungMass => Some(state.lungs.mass),
            Readout::LungVolume => Some(state.lungs.volume),
            Readout::BcdMass => state.bcd.map(|b| b.mass),
            Readout::BcdVolume => state.bcd.map(|b| b.volume),
            Readout::GravityY => Some(state.gravity.y),
        }
    }
}
