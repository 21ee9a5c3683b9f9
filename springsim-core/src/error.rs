//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while configuring or advancing a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("state dimension mismatch: {left} particles vs {right} particles")]
    DimensionMismatch { left: usize, right: usize },

    #[error("particle count mismatch: system has {expected} particles, state has {actual}")]
    ParticleCountMismatch { expected: usize, actual: usize },

    #[error("unsupported integrator kind '{0}' (expected euler, trapezoidal or rk4)")]
    UnsupportedIntegratorKind(String),

    #[error("integration step must be finite and positive, got {0}")]
    InvalidStepSize(f32),

    #[error("delta time must be finite and non-negative, got {0}")]
    InvalidDeltaTime(f32),

    #[error("particle index {index} out of range ({count} particles)")]
    ParticleIndexOutOfRange { index: usize, count: usize },

    #[error("particle {index} has invalid mass {mass}")]
    InvalidMass { index: usize, mass: f32 },

    #[error("invalid spring: stiffness {stiffness}, rest length {rest_length}")]
    InvalidSpring { stiffness: f32, rest_length: f32 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
