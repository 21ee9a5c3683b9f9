//! Ready-made scenes: a circular-motion check, a pendulum chain and a cloth.
//!
//! Each builder returns the force system together with the state it should
//! start from, ready to hand to [`crate::Simulation::new`].

use crate::circular::CircularTestSystem;
use crate::error::{Result, SimError};
use crate::spring_mass::SpringMassSystem;
use crate::state::State;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// Which built-in scene to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Circular,
    Pendulum,
    Cloth,
}

impl ScenarioKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Pendulum => "pendulum",
            Self::Cloth => "cloth",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" | "circle" => Ok(Self::Circular),
            "pendulum" | "chain" => Ok(Self::Pendulum),
            "cloth" => Ok(Self::Cloth),
            other => Err(SimError::Config(format!("unknown scenario '{other}'"))),
        }
    }
}

/// Single particle on the unit circle, starting at `(1, 0, 0)`
pub fn circular() -> (CircularTestSystem, State) {
    (CircularTestSystem::new(), CircularTestSystem::initial_state())
}

#[derive(Debug, Clone, Copy)]
pub struct PendulumParams {
    pub particles: usize,
    pub mass: f32,
    pub stiffness: f32,
    pub rest_length: f32,
    pub gravity: Vec3,
    pub drag_coefficient: f32,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            particles: 4,
            mass: 1.0,
            stiffness: 100.0,
            rest_length: 0.5,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            drag_coefficient: 0.5,
        }
    }
}

/// Vertical chain hanging from a fixed particle 0, every spring at rest length
pub fn pendulum_chain(params: PendulumParams) -> Result<(SpringMassSystem, State)> {
    let mut system = SpringMassSystem::new()
        .with_gravity(params.gravity)
        .with_drag_coefficient(params.drag_coefficient);

    for _ in 0..params.particles {
        system.add_particle(params.mass, false)?;
    }
    if params.particles > 0 {
        system.set_particle_fixed(0, true)?;
    }
    for i in 1..params.particles {
        system.add_spring(i - 1, i, params.stiffness, params.rest_length)?;
    }

    let positions = (0..params.particles)
        .map(|i| Vec3::new(0.0, -(i as f32) * params.rest_length, 0.0))
        .collect();

    Ok((system, State::at_rest(positions)))
}

#[derive(Debug, Clone, Copy)]
pub struct ClothParams {
    pub grid_size: usize,
    pub mass: f32,
    pub spacing: f32,
    pub structural_stiffness: f32,
    pub shear_stiffness: f32,
    pub flex_stiffness: f32,
    pub gravity: Vec3,
    pub drag_coefficient: f32,
}

impl Default for ClothParams {
    fn default() -> Self {
        Self {
            grid_size: 8,
            mass: 0.5,
            spacing: 0.25,
            structural_stiffness: 80.0,
            shear_stiffness: 40.0,
            flex_stiffness: 40.0,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            drag_coefficient: 2.0,
        }
    }
}

/// Row-major particle index of grid cell `(row, col)`
pub fn cloth_index(row: usize, col: usize, grid_size: usize) -> usize {
    row * grid_size + col
}

/// Square cloth hanging from its two top corners
///
/// Structural springs join horizontal and vertical neighbours, shear springs
/// join both diagonals of each cell, and flex springs skip one particle
/// along rows and columns to resist folding.
pub fn cloth(params: ClothParams) -> Result<(SpringMassSystem, State)> {
    let n = params.grid_size;
    let s = params.spacing;
    let idx = |row: usize, col: usize| cloth_index(row, col, n);

    let mut system = SpringMassSystem::new()
        .with_gravity(params.gravity)
        .with_drag_coefficient(params.drag_coefficient);

    for _ in 0..n * n {
        system.add_particle(params.mass, false)?;
    }
    if n > 0 {
        system.set_particle_fixed(idx(0, 0), true)?;
        system.set_particle_fixed(idx(0, n - 1), true)?;
    }

    // Structural
    for i in 0..n {
        for j in 0..n {
            if j + 1 < n {
                system.add_spring(idx(i, j), idx(i, j + 1), params.structural_stiffness, s)?;
            }
            if i + 1 < n {
                system.add_spring(idx(i, j), idx(i + 1, j), params.structural_stiffness, s)?;
            }
        }
    }

    // Shear
    let diagonal = s * std::f32::consts::SQRT_2;
    for i in 0..n.saturating_sub(1) {
        for j in 0..n.saturating_sub(1) {
            system.add_spring(idx(i, j), idx(i + 1, j + 1), params.shear_stiffness, diagonal)?;
            system.add_spring(idx(i, j + 1), idx(i + 1, j), params.shear_stiffness, diagonal)?;
        }
    }

    // Flex
    for i in 0..n {
        for j in 0..n {
            if j + 2 < n {
                system.add_spring(idx(i, j), idx(i, j + 2), params.flex_stiffness, 2.0 * s)?;
            }
            if i + 2 < n {
                system.add_spring(idx(i, j), idx(i + 2, j), params.flex_stiffness, 2.0 * s)?;
            }
        }
    }

    let half_width = n.saturating_sub(1) as f32 * s / 2.0;
    let mut positions = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            positions.push(Vec3::new(j as f32 * s - half_width, -(i as f32) * s, 0.0));
        }
    }

    Ok((system, State::at_rest(positions)))
}
