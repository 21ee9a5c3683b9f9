pub mod circular;
pub mod config;
pub mod error;
pub mod integrator;
pub mod scenario;
pub mod simulation;
pub mod spring_mass;
pub mod state;
pub mod system;

pub use circular::CircularTestSystem;
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use integrator::{
    create_integrator, ForwardEuler, Integrator, IntegratorKind, RungeKutta4, Trapezoidal,
};
pub use scenario::{ClothParams, PendulumParams, ScenarioKind};
pub use simulation::{Simulation, SubSteps};
pub use spring_mass::{Particle, Spring, SpringMassSystem};
pub use state::State;
pub use system::ForceSystem;

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
