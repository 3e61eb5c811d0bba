//! End-to-end runs through the public API.

use approx::assert_relative_eq;
use nalgebra::Vector2;

use nbody::forces::{DirectGravity, ForceModel};
use nbody::progress::Silent;
use nbody::thermal::equilibrium_temperature;
use nbody::{Body, OrbitalPlacement, RunParams, System};
use units::constants::{AU, EARTH_DAY, EARTH_MASS, EARTH_RADIUS, EARTH_YEAR, SOLAR_MASS, SUN_RADIUS, SUN_TEMPERATURE};

fn sun() -> Body {
    Body::at_rest("Sun", SOLAR_MASS, SUN_RADIUS, Vector2::zeros()).heat_source(SUN_TEMPERATURE)
}

#[test]
fn two_body_momentum_is_conserved() {
    let mut system = System::new();
    system.add_body(sun()).unwrap();
    system
        .add_orbiting(&OrbitalPlacement::new("Earth", EARTH_MASS, EARTH_RADIUS).orbiting(["Sun"], AU))
        .unwrap();

    let p0 = system.bodies().iter().fold(Vector2::zeros(), |acc, b| acc + b.momentum());
    let scale = system.bodies()[1].momentum().magnitude();

    let result = system.solve(RunParams::new(EARTH_YEAR, EARTH_DAY / 4.0), &mut Silent).unwrap();
    let p1 = result.final_state.total_momentum();

    assert!((p1 - p0).magnitude() / scale < 1e-9);
}

#[test]
fn lone_heat_source_keeps_its_temperature() {
    let mut system = System::new();
    system.add_body(sun()).unwrap();

    let result = system.solve(RunParams::new(100.0 * EARTH_DAY, EARTH_DAY), &mut Silent).unwrap();
    let series = result.body("Sun").unwrap();

    assert_eq!(series.temperature.len(), 100);
    assert!(series.temperature.iter().all(|&t| t == SUN_TEMPERATURE));
    assert!(series.speed.iter().all(|&v| v == 0.0));
}

#[test]
fn circular_orbit_reaches_equilibrium_temperature() {
    let mut system = System::new();
    system.add_body(sun()).unwrap();
    system
        .add_orbiting(&OrbitalPlacement::new("Earth", EARTH_MASS, EARTH_RADIUS).orbiting(["Sun"], AU))
        .unwrap();

    let result = system.solve(RunParams::new(30.0 * EARTH_DAY, 3600.0), &mut Silent).unwrap();
    let expected = equilibrium_temperature(SUN_TEMPERATURE, SUN_RADIUS, AU);

    let earth = result.body("Earth").unwrap();
    let last = *earth.temperature.last().unwrap();
    assert_relative_eq!(last, expected, max_relative = 5e-3);

    let distance = result.distance_between("Earth", "Sun").unwrap();
    assert_relative_eq!(*distance.last().unwrap(), AU, max_relative = 5e-3);
}

#[test]
fn orbit_stays_bound_for_a_year() {
    let mut system = System::new();
    system.add_body(sun()).unwrap();
    system
        .add_orbiting(&OrbitalPlacement::new("Earth", EARTH_MASS, EARTH_RADIUS).orbiting(["Sun"], AU))
        .unwrap();

    let gravity = DirectGravity::new();
    let e0 = {
        let state = nbody::Ensemble::new(system.bodies().to_vec());
        state.kinetic_energy() + gravity.potential_energy(&state)
    };

    let result = system.solve(RunParams::new(EARTH_YEAR, 3600.0), &mut Silent).unwrap();
    let e1 = result.final_state.kinetic_energy() + gravity.potential_energy(&result.final_state);

    assert!(e1 < 0.0);
    assert_relative_eq!(e1, e0, max_relative = 1e-2);
}

#[test]
fn saved_system_reloads_identically() {
    let mut system = System::new();
    system.add_body(sun()).unwrap();
    system
        .add_orbiting(
            &OrbitalPlacement::new("Venus", 4.867e24, 6.0518e6)
                .orbiting(["Sun"], 0.723 * AU)
                .at_angle(1.1)
                .rotating(-2.99e-7, 0.4),
        )
        .unwrap();
    system
        .add_orbiting(
            &OrbitalPlacement::new("Moon", 7.35e22, 1.737e6)
                .orbiting(["Sun", "Venus"], 0.8 * AU)
                .retrograde(),
        )
        .unwrap();

    let text = system.to_records().unwrap();
    let restored = System::from_records(&text).unwrap();
    assert_eq!(restored.bodies(), system.bodies());
}
