use approx::assert_relative_eq;
use nalgebra::Vector2;
use std::f64::consts::FRAC_PI_2;

use crate::body::Body;

fn earth() -> Body {
    Body::at_rest("Earth", 5.97219e24, 6.371e6, Vector2::new(1.5e11, 0.0))
        .with_velocity(Vector2::new(0.0, 29_780.0))
}

#[test]
fn test_at_rest_defaults() {
    let body = Body::at_rest("Rock", 1.0, 2.0, Vector2::new(3.0, 4.0));
    assert_eq!(body.velocity, Vector2::zeros());
    assert_eq!(body.acceleration, Vector2::zeros());
    assert_eq!(body.temperature, 0.0);
    assert!(!body.is_heat_source);
    assert_eq!(body.angular_velocity, 0.0);
    assert_eq!(body.angle, 0.0);
}

#[test]
fn test_heat_source_builder() {
    let sun = Body::at_rest("Sun", 1.989e30, 6.9634e8, Vector2::zeros()).heat_source(5772.0);
    assert!(sun.is_heat_source);
    assert_eq!(sun.temperature, 5772.0);
}

#[test]
fn test_momentum_and_kinetic_energy() {
    let body = earth();
    assert_relative_eq!(body.momentum().y, 5.97219e24 * 29_780.0);
    assert_relative_eq!(
        body.kinetic_energy(),
        0.5 * 5.97219e24 * 29_780.0 * 29_780.0,
        max_relative = 1e-12
    );
    assert_eq!(body.speed(), 29_780.0);
}

#[test]
fn test_specific_angular_momentum() {
    let body = earth();
    assert_relative_eq!(body.specific_angular_momentum(), 1.5e11 * 29_780.0);
}

#[test]
fn test_distance_to() {
    let a = Body::at_rest("A", 1.0, 0.0, Vector2::new(0.0, 0.0));
    let b = Body::at_rest("B", 1.0, 0.0, Vector2::new(3.0, 4.0));
    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), 5.0);
}

#[test]
fn test_rotation_point() {
    let body = Body::at_rest("Spin", 1.0, 2.0, Vector2::new(10.0, 0.0)).with_rotation(1.0, 0.0);
    // angle 0 marks the top of the body
    assert_relative_eq!(body.rotation_point(), Vector2::new(10.0, 2.0));

    let quarter = body.with_rotation(1.0, FRAC_PI_2);
    let p = quarter.rotation_point();
    assert_relative_eq!(p.x, 12.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_origin_angle() {
    let body = Body::at_rest("Up", 1.0, 0.0, Vector2::new(0.0, 5.0));
    assert_relative_eq!(body.origin_angle(), FRAC_PI_2);
}

#[test]
fn test_is_finite() {
    let mut body = earth();
    assert!(body.is_finite());
    body.velocity.x = f64::NAN;
    assert!(!body.is_finite());
}
