use buoyancy::{DiverState, Readout};

use crate::HostBody;

/// Format every available readout channel as a "label: value" line, the way
/// the source drew its corner debug text, plus the host-owned vertical
/// velocity (the integrator state the model deliberately does not carry).
/// Channels absent on this body (BCD on a freediver) are skipped.
pub fn overlay_lines(state: &DiverState, host: &HostBody) -> Vec<String> {
    let mut lines: Vec<String> = Readout::ALL
        .iter()
        .filter_map(|r| {
            r.sample(state)
                .map(|v| format!("{}: {:.5}", r.label(), v))
        })
        .collect();
    lines.push(format!("velocity.y: {:.5}", host.velocity.y));
    lines
}
