//! Mass-spring-damper force model.
//!
//! Every free particle feels gravity (scaled by its mass), linear drag
//! opposing its velocity, and a Hookean force from each spring attached to
//! it. Fixed particles are frozen: their derivative is zero no matter what
//! forces act on them.

use crate::error::{Result, SimError};
use crate::state::State;
use crate::system::ForceSystem;
use glam::Vec3;

/// Separations at or below this length produce no spring force
pub const SPRING_EPSILON: f32 = 1e-6;

pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);
pub const DEFAULT_DRAG_COEFFICIENT: f32 = 0.5;

/// Per-particle physical properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub mass: f32,
    pub fixed: bool,
}

/// A spring between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub a: usize,     // particle index
    pub b: usize,     // particle index
    pub stiffness: f32,
    pub rest_length: f32,
}

impl Spring {
    /// The particle at the other end, if `index` is one of the endpoints
    pub fn other_end(&self, index: usize) -> Option<usize> {
        if self.a == index {
            Some(self.b)
        } else if self.b == index {
            Some(self.a)
        } else {
            None
        }
    }

    /// Force this spring exerts on the particle at `pos` from the one at `other`
    pub fn force_on(&self, pos: Vec3, other: Vec3) -> Vec3 {
        let d = pos - other;
        let length = d.length();
        if length <= SPRING_EPSILON {
            return Vec3::ZERO;
        }

        let direction = d / length;
        let displacement = length - self.rest_length;
        -self.stiffness * displacement * direction
    }
}

/// Particles joined by springs under uniform gravity and drag
#[derive(Debug, Clone)]
pub struct SpringMassSystem {
    particles: Vec<Particle>,
    springs: Vec<Spring>,
    gravity: Vec3,
    drag_coefficient: f32,
}

impl SpringMassSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            springs: Vec::new(),
            gravity: DEFAULT_GRAVITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag_coefficient(mut self, drag: f32) -> Self {
        self.drag_coefficient = drag;
        self
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    pub fn set_drag_coefficient(&mut self, drag: f32) {
        self.drag_coefficient = drag;
    }

    /// Append a particle and return its index
    pub fn add_particle(&mut self, mass: f32, fixed: bool) -> Result<usize> {
        let index = self.particles.len();
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidMass { index, mass });
        }
        self.particles.push(Particle { mass, fixed });
        Ok(index)
    }

    pub fn set_particle_fixed(&mut self, index: usize, fixed: bool) -> Result<()> {
        let count = self.particles.len();
        let particle = self
            .particles
            .get_mut(index)
            .ok_or(SimError::ParticleIndexOutOfRange { index, count })?;
        particle.fixed = fixed;
        Ok(())
    }

    /// Connect two existing particles and return the spring's index
    pub fn add_spring(
        &mut self,
        a: usize,
        b: usize,
        stiffness: f32,
        rest_length: f32,
    ) -> Result<usize> {
        let count = self.particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(SimError::ParticleIndexOutOfRange { index, count });
            }
        }
        let valid = |x: f32| x.is_finite() && x >= 0.0;
        if !valid(stiffness) || !valid(rest_length) {
            return Err(SimError::InvalidSpring {
                stiffness,
                rest_length,
            });
        }

        self.springs.push(Spring {
            a,
            b,
            stiffness,
            rest_length,
        });
        Ok(self.springs.len() - 1)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    /// Net force on particle `index` for the given positions and velocities
    fn net_force(&self, index: usize, positions: &[Vec3], velocities: &[Vec3]) -> Vec3 {
        let particle = &self.particles[index];
        let pos = positions[index];

        let mut force = particle.mass * self.gravity;
        force += -self.drag_coefficient * velocities[index];

        for spring in &self.springs {
            if let Some(other) = spring.other_end(index) {
                force += spring.force_on(pos, positions[other]);
            }
        }

        force
    }
}

impl Default for SpringMassSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSystem for SpringMassSystem {
    fn particle_count(&self) -> usize {
        self.particles.len()
    }

    fn derivative(&self, state: &State, _time: f32) -> Result<State> {
        self.check_state(state)?;

        let positions = state.positions();
        let velocities = state.velocities();
        let mut derivative = State::zeros(state.len());
        let (d_pos, d_vel) = derivative.parts_mut();

        for (i, particle) in self.particles.iter().enumerate() {
            if particle.fixed {
                continue;
            }
            d_pos[i] = velocities[i];
            d_vel[i] = self.net_force(i, positions, velocities) / particle.mass;
        }

        Ok(derivative)
    }
}
