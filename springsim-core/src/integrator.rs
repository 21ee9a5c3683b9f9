//! Explicit fixed-step integrators over the [`ForceSystem`] contract.
//!
//! All three are stateless: they hold no simulation data and never mutate
//! the system or the input state, returning a fresh [`State`] instead.
//!
//! | kind        | order | derivative evaluations |
//! |-------------|-------|------------------------|
//! | Euler       | 1     | 1                      |
//! | Trapezoidal | 2     | 2                      |
//! | RK4         | 4     | 4                      |

use crate::error::{Result, SimError};
use crate::state::State;
use crate::system::ForceSystem;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Advance a state by one step of size `dt` starting at time `t`
pub trait Integrator: Send + Sync {
    fn kind(&self) -> IntegratorKind;

    fn integrate(
        &self,
        system: &dyn ForceSystem,
        state: &State,
        t: f32,
        dt: f32,
    ) -> Result<State>;
}

/// Selector for the available integrators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum IntegratorKind {
    Euler,
    Trapezoidal,
    Rk4,
}

impl IntegratorKind {
    pub const ALL: [IntegratorKind; 3] = [Self::Euler, Self::Trapezoidal, Self::Rk4];

    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Trapezoidal => "trapezoidal",
            Self::Rk4 => "rk4",
        }
    }

    /// Derivative evaluations per step
    pub fn evaluations(self) -> usize {
        match self {
            Self::Euler => 1,
            Self::Trapezoidal => 2,
            Self::Rk4 => 4,
        }
    }
}

impl fmt::Display for IntegratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntegratorKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" | "forward-euler" | "forward_euler" => Ok(Self::Euler),
            "trapezoidal" | "heun" => Ok(Self::Trapezoidal),
            "rk4" | "runge-kutta" => Ok(Self::Rk4),
            _ => Err(SimError::UnsupportedIntegratorKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for IntegratorKind {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Build the integrator for `kind`
pub fn create_integrator(kind: IntegratorKind) -> Box<dyn Integrator> {
    match kind {
        IntegratorKind::Euler => Box::new(ForwardEuler),
        IntegratorKind::Trapezoidal => Box::new(Trapezoidal),
        IntegratorKind::Rk4 => Box::new(RungeKutta4),
    }
}

/// `x + f(x, t) * dt`
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn kind(&self) -> IntegratorKind {
        IntegratorKind::Euler
    }

    fn integrate(
        &self,
        system: &dyn ForceSystem,
        state: &State,
        t: f32,
        dt: f32,
    ) -> Result<State> {
        let f0 = system.derivative(state, t)?;
        state.add_scaled(&f0, dt)
    }
}

/// Heun's method: average the slope at the start and at an Euler predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct Trapezoidal;

impl Integrator for Trapezoidal {
    fn kind(&self) -> IntegratorKind {
        IntegratorKind::Trapezoidal
    }

    fn integrate(
        &self,
        system: &dyn ForceSystem,
        state: &State,
        t: f32,
        dt: f32,
    ) -> Result<State> {
        let f0 = system.derivative(state, t)?;
        let predictor = state.add_scaled(&f0, dt)?;
        let f1 = system.derivative(&predictor, t + dt)?;
        state.add_scaled(&f0.add(&f1)?, dt / 2.0)
    }
}

/// Classic four-stage Runge-Kutta
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKutta4;

impl Integrator for RungeKutta4 {
    fn kind(&self) -> IntegratorKind {
        IntegratorKind::Rk4
    }

    fn integrate(
        &self,
        system: &dyn ForceSystem,
        state: &State,
        t: f32,
        dt: f32,
    ) -> Result<State> {
        let half_dt = dt / 2.0;

        let k1 = system.derivative(state, t)?;
        let k2 = system.derivative(&state.add_scaled(&k1, half_dt)?, t + half_dt)?;
        let k3 = system.derivative(&state.add_scaled(&k2, half_dt)?, t + half_dt)?;
        let k4 = system.derivative(&state.add_scaled(&k3, dt)?, t + dt)?;

        // k1 + 2*k2 + 2*k3 + k4
        let slope = k1
            .add_scaled(&k2, 2.0)?
            .add_scaled(&k3, 2.0)?
            .add(&k4)?;
        state.add_scaled(&slope, dt / 6.0)
    }
}
