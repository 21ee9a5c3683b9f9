//! Test helper utilities shared by unit and integration tests

use crate::config::SimulationConfig;
use crate::integrator::IntegratorKind;
use crate::simulation::Simulation;
use crate::state::State;
use crate::system::ForceSystem;
use glam::Vec3;

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq_f32(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Check if two vectors are within `tol` of each other (Euclidean distance)
pub fn approx_eq_vec3(a: Vec3, b: Vec3, tol: f32) -> bool {
    a.distance(b) <= tol
}

/// Exact equality, bit for bit, of every component of two states
pub fn states_bit_equal(a: &State, b: &State) -> bool {
    let bits = |v: &Vec3| v.to_array().map(f32::to_bits);
    a.len() == b.len()
        && a.positions().iter().map(bits).eq(b.positions().iter().map(bits))
        && a.velocities().iter().map(bits).eq(b.velocities().iter().map(bits))
}

/// Largest position distance between corresponding particles
pub fn max_position_error(a: &State, b: &State) -> f32 {
    a.positions()
        .iter()
        .zip(b.positions())
        .map(|(p, q)| p.distance(*q))
        .fold(0.0, f32::max)
}

/// Build a simulation, advance it by `duration` and return the final state
pub fn run_for<S: ForceSystem>(
    system: S,
    initial: State,
    kind: IntegratorKind,
    max_step: f32,
    duration: f32,
) -> crate::Result<State> {
    let config = SimulationConfig::new(kind, max_step)?;
    let mut sim = Simulation::new(config, system, initial)?;
    sim.advance(duration)?;
    Ok(sim.state().clone())
}
