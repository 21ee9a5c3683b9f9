//! Simulation configuration, loadable from YAML.
//!
//! ```yaml
//! integrator: rk4          # euler | trapezoidal | rk4
//! integration_step: 0.01   # largest sub-step, seconds
//! ```

use crate::error::{Result, SimError};
use crate::integrator::IntegratorKind;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_INTEGRATION_STEP: f32 = 0.01;

/// Integrator choice and sub-step cap for one simulation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub integrator: IntegratorKind,
    pub integration_step: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorKind::Rk4,
            integration_step: DEFAULT_INTEGRATION_STEP,
        }
    }
}

impl SimulationConfig {
    pub fn new(integrator: IntegratorKind, integration_step: f32) -> Result<Self> {
        let config = Self {
            integrator,
            integration_step,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.integration_step.is_finite() || self.integration_step <= 0.0 {
            return Err(SimError::InvalidStepSize(self.integration_step));
        }
        Ok(())
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(source).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }
}
