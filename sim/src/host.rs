use buoyancy::{DiverState, Vec2f};

/// Horizontal nudge per tick while a swim key is held (px, not dt-scaled;
/// the source moved the sprite directly, bypassing its physics body).
pub const SWIM_STEP_PX: f32 = 0.25;

/// Minimal host-engine stand-in: owns the velocity the model deliberately
/// does not, integrates the model's acceleration output, and keeps the body
/// inside the tank.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostBody {
    pub velocity: Vec2f,
}

impl HostBody {
    /// One Euler step: apply the swim nudge, integrate `state.gravity.y`
    /// into vertical velocity and position, then clamp to the world bounds,
    /// zeroing vertical velocity on contact.
    pub fn integrate(&mut self, state: &mut DiverState, swim: f32, dt: f32, bounds: Vec2f) {
        state.position.x += swim.clamp(-1.0, 1.0) * SWIM_STEP_PX;
        self.velocity.y += state.gravity.y * dt;
        state.position.y += self.velocity.y * dt;

        state.position.x = state.position.x.clamp(0.0, bounds.x);
        if state.position.y < 0.0 {
            state.position.y = 0.0;
            self.velocity.y = 0.0;
        } else if state.position.y > bounds.y {
            state.position.y = bounds.y;
            self.velocity.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buoyancy::diverspecs;

    const DT: f32 = 1.0 / 60.0;
    const BOUNDS: Vec2f = Vec2f::new(800.0, 600.0);

    fn state_with_accel(gravity_y: f32) -> DiverState {
        let spec = diverspecs::freediver_spec();
        let mut state = DiverState::new(&spec, Vec2f::new(400.0, 264.0), 5.0, 0.01);
        state.gravity.y = gravity_y;
        state
    }

    #[test]
    fn constant_accel_accumulates_velocity() {
        let mut host = HostBody::default();
        let mut state = state_with_accel(2.0);
        for _ in 0..60 {
            host.integrate(&mut state, 0.0, DT, BOUNDS);
        }
        // One second at 2 px/s^2
        assert!((host.velocity.y - 2.0).abs() < 1e-3);
        assert!(state.position.y > 264.0);
    }

    #[test]
    fn swim_nudge_is_per_tick_not_per_second() {
        let mut host = HostBody::default();
        let mut state = state_with_accel(0.0);
        for _ in 0..240 {
            host.integrate(&mut state, 1.0, DT, BOUNDS);
        }
        assert!((state.position.x - (400.0 + 240.0 * SWIM_STEP_PX)).abs() < 1e-3);
    }

    #[test]
    fn floor_contact_zeroes_vertical_velocity() {
        let mut host = HostBody::default();
        let mut state = state_with_accel(50.0);
        for _ in 0..3600 {
            host.integrate(&mut state, 0.0, DT, BOUNDS);
        }
        assert_eq!(state.position.y, BOUNDS.y);
        assert_eq!(host.velocity.y, 0.0);
    }

    #[test]
    fn surface_contact_zeroes_vertical_velocity() {
        let mut host = HostBody::default();
        let mut state = state_with_accel(-50.0);
        for _ in 0..3600 {
            host.integrate(&mut state, 0.0, DT, BOUNDS);
        }
        assert_eq!(state.position.y, 0.0);
        assert_eq!(host.velocity.y, 0.0);
    }
}
