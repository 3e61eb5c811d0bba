use approx::assert_relative_eq;
use nalgebra::Vector2;
use std::f64::consts::PI;

use crate::body::Body;
use crate::error::SimulationError;
use crate::forces::{DirectGravity, ForceModel};
use crate::integrator::{wrap_angle, Integrator, RotationPhase, SemiImplicitEuler};
use crate::state::Ensemble;
use crate::thermal::{equilibrium_temperature, RadiativeEquilibrium};
use units::constants::{AU, EARTH_MASS, EARTH_RADIUS, G, SOLAR_MASS, SUN_RADIUS, TWO_PI};

fn sun_earth() -> Ensemble {
    let v = (G * SOLAR_MASS / AU).sqrt();
    Ensemble::new(vec![
        Body::at_rest("Sun", SOLAR_MASS, SUN_RADIUS, Vector2::zeros()).heat_source(5772.0),
        Body::at_rest("Earth", EARTH_MASS, EARTH_RADIUS, Vector2::new(AU, 0.0))
            .with_velocity(Vector2::new(0.0, v))
            .with_rotation(7.27e-5, 0.0),
    ])
}

fn step(ensemble: &Ensemble, dt: f64) -> Result<Ensemble, SimulationError> {
    SemiImplicitEuler::default().step(ensemble, dt, &DirectGravity::new(), &RadiativeEquilibrium::new())
}

#[test]
fn test_step_advances_time() {
    let next = step(&sun_earth(), 3600.0).unwrap();
    assert_eq!(next.time, 3600.0);
    let after = step(&next, 3600.0).unwrap();
    assert_eq!(after.time, 7200.0);
}

#[test]
fn test_position_uses_updated_velocity() {
    let ensemble = sun_earth();
    let dt = 86_400.0;
    let accelerations = DirectGravity::new().accelerations(&ensemble).unwrap();
    let next = step(&ensemble, dt).unwrap();

    for (i, body) in ensemble.bodies.iter().enumerate() {
        let v = body.velocity + accelerations[i] * dt;
        assert_eq!(next.bodies[i].velocity, v);
        assert_eq!(next.bodies[i].position, body.position + v * dt);
        assert_eq!(next.bodies[i].acceleration, accelerations[i]);
    }
}

#[test]
fn test_free_body_moves_in_straight_line() {
    let ensemble = Ensemble::new(vec![
        Body::at_rest("Drifter", 1.0, 1.0, Vector2::new(1.0, 2.0)).with_velocity(Vector2::new(3.0, -1.0)),
    ]);
    let next = step(&ensemble, 2.0).unwrap();
    assert_eq!(next.bodies[0].position, Vector2::new(7.0, 0.0));
    assert_eq!(next.bodies[0].velocity, Vector2::new(3.0, -1.0));
}

#[test]
fn test_input_snapshot_is_untouched() {
    let ensemble = sun_earth();
    let copy = ensemble.clone();
    let _ = step(&ensemble, 3600.0).unwrap();
    assert_eq!(ensemble, copy);
}

#[test]
fn test_temperature_from_pre_step_positions() {
    let ensemble = sun_earth();
    let next = step(&ensemble, 3600.0).unwrap();
    assert_eq!(next.bodies[0].temperature, 5772.0);
    assert_relative_eq!(
        next.bodies[1].temperature,
        equilibrium_temperature(5772.0, SUN_RADIUS, AU),
        max_relative = 1e-12
    );
}

#[test]
fn test_recomputed_rotation_does_not_accumulate() {
    let dt = 3600.0;
    let first = step(&sun_earth(), dt).unwrap();
    let second = step(&first, dt).unwrap();

    let expected = wrap_angle(dt * 7.27e-5);
    assert_eq!(first.bodies[1].angle, expected);
    assert_eq!(second.bodies[1].angle, expected);
}

#[test]
fn test_accumulated_rotation() {
    let dt = 3600.0;
    let integrator = SemiImplicitEuler::new(RotationPhase::Accumulated);
    let gravity = DirectGravity::new();
    let thermal = RadiativeEquilibrium::new();

    let after = integrator.integrate(&sun_earth(), dt, 3, &gravity, &thermal).unwrap();
    assert_relative_eq!(after.bodies[1].angle, 3.0 * dt * 7.27e-5, max_relative = 1e-12);
    assert_eq!(after.time, 3.0 * dt);
}

#[test]
fn test_rotation_phase_default_is_recomputed() {
    assert_eq!(RotationPhase::default(), RotationPhase::Recomputed);
    assert_eq!(RotationPhase::Recomputed.advance(5.0, 1.0, 0.5), 0.5);
    assert_eq!(RotationPhase::Accumulated.advance(1.0, 1.0, 0.5), 1.5);
}

#[test]
fn test_wrap_angle() {
    assert_eq!(wrap_angle(0.0), 0.0);
    assert_eq!(wrap_angle(TWO_PI), 0.0);
    assert_relative_eq!(wrap_angle(-0.5), TWO_PI - 0.5);
    assert_relative_eq!(wrap_angle(7.0 * PI), PI, max_relative = 1e-12);
    let huge = wrap_angle(1.0e12);
    assert!((0.0..TWO_PI).contains(&huge));
    assert!(wrap_angle(f64::NAN).is_nan());
}

#[test]
fn test_wrap_angle_matches_turn_by_turn_below_limit() {
    for angle in [40.0 * PI + 0.3, -40.0 * PI - 0.3, 127.0 * PI] {
        let mut expected = angle;
        while expected >= TWO_PI {
            expected -= TWO_PI;
        }
        while expected < 0.0 {
            expected += TWO_PI;
        }
        assert_eq!(wrap_angle(angle), expected);
    }
}

#[test]
fn test_momentum_conserved_over_a_year() {
    let ensemble = sun_earth();
    let p0 = ensemble.total_momentum();
    let scale = ensemble.bodies[1].momentum().magnitude();

    let after = SemiImplicitEuler::default()
        .integrate(&ensemble, 3600.0, 24 * 365, &DirectGravity::new(), &RadiativeEquilibrium::new())
        .unwrap();

    assert!((after.total_momentum() - p0).magnitude() / scale < 1e-9);
}

#[test]
fn test_coincident_bodies_fail_the_step() {
    let ensemble = Ensemble::new(vec![
        Body::at_rest("A", 1.0, 1.0, Vector2::new(1.0, 1.0)),
        Body::at_rest("B", 1.0, 1.0, Vector2::new(1.0, 1.0)),
    ]);
    assert!(matches!(
        step(&ensemble, 1.0),
        Err(SimulationError::DegenerateGeometry { .. })
    ));
}

#[test]
fn test_overflow_is_reported() {
    let ensemble = Ensemble::new(vec![
        Body::at_rest("Dense", 1.0e300, 0.0, Vector2::zeros()),
        Body::at_rest("Near", 1.0e300, 0.0, Vector2::new(1.0e-150, 0.0)),
    ]);
    assert_eq!(
        step(&ensemble, 1.0),
        Err(SimulationError::NonFinite {
            body: "Dense".into(),
            time: 1.0,
        })
    );
}

#[test]
fn test_empty_ensemble_steps() {
    let next = step(&Ensemble::default(), 10.0).unwrap();
    assert!(next.is_empty());
    assert_eq!(next.time, 10.0);
}
