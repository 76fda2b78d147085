use crate::DiverPhysicsSpec;

/// Ambient pressure at vertical position `y`, linear in depth.
/// Not clamped: y above the surface (y < 0) yields pressure < 1 atm.
pub fn ambient_pressure_at_y(spec: &DiverPhysicsSpec, y: f32) -> f32 {
    y / spec.pixels_per_atm + 1.0
}

/// Gas volume occupied by `mass` at `pressure`, Boyle's-law style relative
/// to a reference of 1 atm where mass and volume coincide.
pub fn volume_from_mass(mass: f32, pressure: f32) -> f32 {
    mass / 2f32.powf(pressure - 1.0)
}

/// Inverse of `volume_from_mass`: the gas mass that occupies `volume` at
/// `pressure`. Used to seed reservoirs near equilibrium.
pub fn mass_from_volume(volume: f32, pressure: f32) -> f32 {
    volume * 2f32.powf(pressure - 1.0)
}

/// Net vertical acceleration for a body of `weight` carrying
/// `total_air_volume` of gas. Positive is downward (toward depth).
pub(super) fn buoyant_accel_y(spec: &DiverPhysicsSpec, weight: f32, total_air_volume: f32) -> f32 {
    weight + (spec.air_density - spec.water_density) * spec.gravity_constant * total_air_volume
}
