//! Simulation state vector and the linear algebra integrators need.
//!
//! A [`State`] is two index-aligned sequences: particle `i` sits at
//! `positions[i]` and moves with `velocities[i]`. Derivatives share the same
//! shape (velocity in the position slot, acceleration in the velocity slot),
//! so integrators can combine states and derivatives freely.

use crate::error::{Result, SimError};
use glam::Vec3;

/// Positions and velocities of every particle at one instant
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
}

impl State {
    /// Build a state from position and velocity sequences of equal length
    pub fn new(positions: Vec<Vec3>, velocities: Vec<Vec3>) -> Result<Self> {
        if positions.len() != velocities.len() {
            return Err(SimError::DimensionMismatch {
                left: positions.len(),
                right: velocities.len(),
            });
        }
        Ok(Self {
            positions,
            velocities,
        })
    }

    /// All particles at the given positions, at rest
    pub fn at_rest(positions: Vec<Vec3>) -> Self {
        let velocities = vec![Vec3::ZERO; positions.len()];
        Self {
            positions,
            velocities,
        }
    }

    /// `len` particles at the origin with zero velocity
    pub fn zeros(len: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; len],
            velocities: vec![Vec3::ZERO; len],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Mutable access to both sequences at once; lengths cannot change
    pub fn parts_mut(&mut self) -> (&mut [Vec3], &mut [Vec3]) {
        (self.positions.as_mut_slice(), self.velocities.as_mut_slice())
    }

    /// Elementwise sum `self + other`
    pub fn add(&self, other: &State) -> Result<State> {
        self.add_scaled(other, 1.0)
    }

    /// Elementwise `self * k`
    pub fn scale(&self, k: f32) -> State {
        State {
            positions: self.positions.iter().map(|p| *p * k).collect(),
            velocities: self.velocities.iter().map(|v| *v * k).collect(),
        }
    }

    /// `self + other * k` in one pass, the shape every integrator stage takes
    pub fn add_scaled(&self, other: &State, k: f32) -> Result<State> {
        if self.len() != other.len() {
            return Err(SimError::DimensionMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let positions = self
            .positions
            .iter()
            .zip(&other.positions)
            .map(|(a, b)| *a + *b * k)
            .collect();
        let velocities = self
            .velocities
            .iter()
            .zip(&other.velocities)
            .map(|(a, b)| *a + *b * k)
            .collect();

        Ok(State {
            positions,
            velocities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_ragged_sequences() {
        let err = State::new(vec![Vec3::ZERO; 2], vec![Vec3::ZERO; 3]).unwrap_err();
        assert!(matches!(
            err,
            SimError::DimensionMismatch { left: 2, right: 3 }
        ));
    }

    #[test]
    fn add_scaled_matches_add_of_scale() {
        let a = State::new(vec![Vec3::new(1.0, 2.0, 3.0)], vec![Vec3::X]).unwrap();
        let b = State::new(vec![Vec3::new(-1.0, 0.5, 4.0)], vec![Vec3::Y]).unwrap();

        let fused = a.add_scaled(&b, 0.25).unwrap();
        let split = a.add(&b.scale(0.25)).unwrap();
        assert_eq!(fused, split);
    }
}
