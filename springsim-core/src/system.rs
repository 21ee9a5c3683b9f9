//! The contract shared by every physical system an integrator can drive.

use crate::error::{Result, SimError};
use crate::state::State;

/// A physical system that knows how its state changes over time
///
/// `derivative` must be a pure function of its inputs: the returned state
/// carries each particle's velocity in the position slot and its net
/// acceleration in the velocity slot.
pub trait ForceSystem {
    /// Number of particles a state must have to be valid for this system
    fn particle_count(&self) -> usize;

    /// Time derivative of `state` at `time`
    fn derivative(&self, state: &State, time: f32) -> Result<State>;

    /// Fail with `ParticleCountMismatch` unless `state` fits this system
    fn check_state(&self, state: &State) -> Result<()> {
        let expected = self.particle_count();
        if state.len() != expected {
            return Err(SimError::ParticleCountMismatch {
                expected,
                actual: state.len(),
            });
        }
        Ok(())
    }
}

impl<S: ForceSystem + ?Sized> ForceSystem for &S {
    fn particle_count(&self) -> usize {
        (**self).particle_count()
    }

    fn derivative(&self, state: &State, time: f32) -> Result<State> {
        (**self).derivative(state, time)
    }
}
