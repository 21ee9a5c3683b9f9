//! Loading simulation configuration from files

use springsim_core::{scenario, IntegratorKind, SimError, Simulation, SimulationConfig};
use std::path::PathBuf;

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(filename);
    path
}

#[test]
fn test_load_config_file() {
    let config = SimulationConfig::load(test_data_path("trapezoidal_fine.yaml"))
        .expect("Failed to load config");

    assert_eq!(config.integrator, IntegratorKind::Trapezoidal);
    assert_eq!(config.integration_step, 0.005);

    let (system, initial) = scenario::circular();
    let sim = Simulation::new(config, system, initial).expect("Failed to build simulation");
    assert_eq!(sim.integrator_kind(), IntegratorKind::Trapezoidal);
}

#[test]
fn test_unknown_integrator_fails_at_load() {
    let err = SimulationConfig::load(test_data_path("unknown_integrator.yaml")).unwrap_err();
    assert!(matches!(err, SimError::Config(ref msg) if msg.contains("verlet")));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SimulationConfig::load(test_data_path("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
