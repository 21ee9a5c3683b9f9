//! Built-in scene construction

use glam::Vec3;
use springsim_core::scenario::{self, cloth_index};
use springsim_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec3};
use springsim_core::{
    ClothParams, ForceSystem, IntegratorKind, PendulumParams, ScenarioKind, Simulation,
    SimulationConfig,
};

#[test]
fn test_pendulum_chain_layout() {
    let (system, initial) = scenario::pendulum_chain(PendulumParams::default()).unwrap();

    assert_eq!(system.particle_count(), 4);
    assert_eq!(system.springs().len(), 3);
    assert!(system.particles()[0].fixed);
    assert!(system.particles()[1..].iter().all(|p| !p.fixed));

    for (i, pos) in initial.positions().iter().enumerate() {
        assert_eq!(*pos, Vec3::new(0.0, -(i as f32) * 0.5, 0.0));
    }
    assert!(initial.velocities().iter().all(|v| *v == Vec3::ZERO));
}

#[test]
fn test_pendulum_springs_start_at_rest_length() {
    let (system, initial) = scenario::pendulum_chain(PendulumParams::default()).unwrap();
    for spring in system.springs() {
        let length = initial.positions()[spring.a].distance(initial.positions()[spring.b]);
        assert!(approx_eq_f32(length, spring.rest_length, 1e-6));
    }
}

#[test]
fn test_cloth_spring_counts() {
    let (system, initial) = scenario::cloth(ClothParams::default()).unwrap();
    let n = 8;

    assert_eq!(system.particle_count(), n * n);
    assert_eq!(initial.len(), n * n);

    let structural = 2 * n * (n - 1);
    let shear = 2 * (n - 1) * (n - 1);
    let flex = 2 * n * (n - 2);
    assert_eq!(system.springs().len(), structural + shear + flex);
}

#[test]
fn test_cloth_springs_start_at_rest_length() {
    let (system, initial) = scenario::cloth(ClothParams::default()).unwrap();
    for spring in system.springs() {
        let length = initial.positions()[spring.a].distance(initial.positions()[spring.b]);
        assert!(
            approx_eq_f32(length, spring.rest_length, 1e-5),
            "spring {}-{}: length {length}, rest {}",
            spring.a,
            spring.b,
            spring.rest_length
        );
    }
}

#[test]
fn test_cloth_is_pinned_at_top_corners() {
    let params = ClothParams::default();
    let n = params.grid_size;
    let (system, initial) = scenario::cloth(params).unwrap();

    let fixed: Vec<usize> = (0..system.particle_count())
        .filter(|&i| system.particles()[i].fixed)
        .collect();
    assert_eq!(fixed, vec![cloth_index(0, 0, n), cloth_index(0, n - 1, n)]);

    let left = initial.positions()[cloth_index(0, 0, n)];
    let right = initial.positions()[cloth_index(0, n - 1, n)];
    assert!(approx_eq_vec3(left, -right, 1e-6), "grid should be centred");
    assert_eq!(left.y, 0.0);
}

#[test]
fn test_cloth_sags_under_gravity() {
    let params = ClothParams::default();
    let n = params.grid_size;
    let (system, initial) = scenario::cloth(params).unwrap();
    let config = SimulationConfig::new(IntegratorKind::Rk4, 0.005).unwrap();
    let mut sim = Simulation::new(config, system, initial.clone()).unwrap();

    for _ in 0..30 {
        sim.tick(1.0 / 60.0, false).unwrap();
    }

    let bottom = cloth_index(n - 1, n / 2, n);
    assert!(sim.positions()[bottom].y < initial.positions()[bottom].y);
    assert!(sim.positions().iter().all(|p| p.is_finite()));
}

#[test]
fn test_scenario_kind_parsing() {
    assert_eq!("cloth".parse::<ScenarioKind>().unwrap(), ScenarioKind::Cloth);
    assert_eq!("Pendulum".parse::<ScenarioKind>().unwrap(), ScenarioKind::Pendulum);
    assert_eq!("circular".parse::<ScenarioKind>().unwrap(), ScenarioKind::Circular);
    assert!("rope".parse::<ScenarioKind>().is_err());
}
