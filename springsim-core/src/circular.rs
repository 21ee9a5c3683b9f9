//! Uniform circular motion, used to check integrators against a closed form.
//!
//! The single particle's velocity is the position rotated a quarter turn about
//! +Z, so starting from `(1, 0, 0)` the exact trajectory is
//! `(cos t, sin t, 0)`.

use crate::error::Result;
use crate::state::State;
use crate::system::ForceSystem;
use glam::Vec3;

#[derive(Debug, Clone, Copy, Default)]
pub struct CircularTestSystem;

impl CircularTestSystem {
    pub fn new() -> Self {
        Self
    }

    /// Exact position at `time` for a particle that started at `(1, 0, 0)`
    pub fn analytic_position(time: f32) -> Vec3 {
        Vec3::new(time.cos(), time.sin(), 0.0)
    }

    pub fn initial_state() -> State {
        State::at_rest(vec![Vec3::X])
    }
}

impl ForceSystem for CircularTestSystem {
    fn particle_count(&self) -> usize {
        1
    }

    fn derivative(&self, state: &State, _time: f32) -> Result<State> {
        self.check_state(state)?;

        let pos = state.positions()[0];
        Ok(State::at_rest(vec![Vec3::new(-pos.y, pos.x, 0.0)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn derivative_is_tangent_to_circle() {
        let system = CircularTestSystem::new();
        let state = State::at_rest(vec![Vec3::new(0.0, 2.0, 0.0)]);
        let d = system.derivative(&state, 0.0).unwrap();

        assert_eq!(d.positions()[0], Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(d.velocities()[0], Vec3::ZERO);
        assert_eq!(d.positions()[0].dot(state.positions()[0]), 0.0);
    }

    #[test]
    fn rejects_wrong_particle_count() {
        let system = CircularTestSystem::new();
        let err = system.derivative(&State::zeros(2), 0.0).unwrap_err();
        assert!(matches!(
            err,
            SimError::ParticleCountMismatch {
                expected: 1,
                actual: 2
            }
        ));
    }
}
