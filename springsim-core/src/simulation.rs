//! Fixed sub-step simulation driver.
//!
//! A host calls [`Simulation::tick`] once per frame with the wall-clock time
//! elapsed since the previous frame. The driver splits that interval into
//! sub-steps no larger than the configured maximum, so a long stall never
//! turns into one huge (and unstable) integration step.

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::integrator::{create_integrator, Integrator, IntegratorKind};
use crate::state::State;
use crate::system::ForceSystem;
use glam::Vec3;

/// Ratios within this relative distance of a whole number count as whole,
/// so `0.07 / 0.01` plans 7 sub-steps despite `f32` input rounding
const WHOLE_RATIO_TOLERANCE: f64 = 1e-6;

/// Sub-step sizes covering one `delta_time`, planned up front
///
/// Every step is `max_step` except the last, which takes the remainder.
/// The count is fixed before the first step, so the sequence always ends.
#[derive(Debug, Clone)]
pub struct SubSteps {
    delta_time: f64,
    max_step: f64,
    count: usize,
    index: usize,
}

impl SubSteps {
    /// `max_step` must be positive; [`SimulationConfig::validate`] enforces it
    pub fn new(delta_time: f32, max_step: f32) -> Self {
        let delta_time = f64::from(delta_time);
        let max_step = f64::from(max_step);
        Self {
            delta_time,
            max_step,
            count: substep_count(delta_time, max_step),
            index: 0,
        }
    }
}

/// `ceil(delta_time / max_step)`, treating near-whole ratios as whole
fn substep_count(delta_time: f64, max_step: f64) -> usize {
    if delta_time <= 0.0 {
        return 0;
    }
    let ratio = delta_time / max_step;
    let nearest = ratio.round();
    if nearest >= 1.0 && (ratio - nearest).abs() <= WHOLE_RATIO_TOLERANCE * nearest {
        nearest as usize
    } else {
        ratio.ceil() as usize
    }
}

impl Iterator for SubSteps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.count {
            return None;
        }
        let taken = self.index as f64 * self.max_step;
        self.index += 1;
        let step = (self.delta_time - taken).min(self.max_step);
        Some(step as f32)
    }

    fn nth(&mut self, n: usize) -> Option<f32> {
        self.index = self.index.saturating_add(n).min(self.count);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SubSteps {}

/// A force system, its live state and the integrator advancing it
pub struct Simulation<S: ForceSystem> {
    system: S,
    integrator: Box<dyn Integrator>,
    max_step: f32,
    initial_state: State,
    state: State,
    elapsed_time: f64,
}

impl<S: ForceSystem> Simulation<S> {
    /// Validate the configuration against `system` and pair them up
    pub fn new(config: SimulationConfig, system: S, initial_state: State) -> Result<Self> {
        config.validate()?;
        system.check_state(&initial_state)?;

        tracing::debug!(
            integrator = %config.integrator,
            max_step = config.integration_step,
            evaluations_per_step = config.integrator.evaluations(),
            particles = initial_state.len(),
            "simulation created"
        );

        Ok(Self {
            system,
            integrator: create_integrator(config.integrator),
            max_step: config.integration_step,
            state: initial_state.clone(),
            initial_state,
            elapsed_time: 0.0,
        })
    }

    /// Handle one host frame and return the positions to present
    ///
    /// A reset consumes the whole tick: the state is restored and no
    /// integration happens until the next call.
    pub fn tick(&mut self, delta_time: f32, reset: bool) -> Result<&[Vec3]> {
        if reset {
            self.reset();
        } else {
            self.advance(delta_time)?;
        }
        Ok(self.state.positions())
    }

    /// Integrate forward by `delta_time`, returning the number of sub-steps
    pub fn advance(&mut self, delta_time: f32) -> Result<usize> {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(SimError::InvalidDeltaTime(delta_time));
        }

        let steps = SubSteps::new(delta_time, self.max_step);
        let substeps = steps.len();
        for step in steps {
            self.state = self.integrator.integrate(
                &self.system,
                &self.state,
                self.elapsed_time as f32,
                step,
            )?;
            self.elapsed_time += f64::from(step);
        }

        tracing::trace!(delta_time, substeps, t = self.elapsed_time, "advanced");
        Ok(substeps)
    }

    /// Restore the initial state and rewind the clock
    pub fn reset(&mut self) {
        self.state.clone_from(&self.initial_state);
        self.elapsed_time = 0.0;
        tracing::debug!("simulation reset");
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn positions(&self) -> &[Vec3] {
        self.state.positions()
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time as f32
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn integrator_kind(&self) -> IntegratorKind {
        self.integrator.kind()
    }

    pub fn max_step(&self) -> f32 {
        self.max_step
    }
}
