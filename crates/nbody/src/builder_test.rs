use approx::assert_relative_eq;
use nalgebra::Vector2;
use std::f64::consts::FRAC_PI_2;

use crate::body::Body;
use crate::builder::{orbital_speed, pivot_center, place, validate_body, validate_name, OrbitalPlacement};
use crate::error::ValidationError;
use units::constants::{AU, EARTH_MASS, EARTH_RADIUS, G, SOLAR_MASS, SUN_RADIUS};

fn sun() -> Body {
    Body::at_rest("Sun", SOLAR_MASS, SUN_RADIUS, Vector2::zeros()).heat_source(5772.0)
}

#[test]
fn test_place_without_pivots() {
    let placement = OrbitalPlacement::new("Rogue", EARTH_MASS, EARTH_RADIUS)
        .orbiting(Vec::<String>::new(), 7.0e10);
    let body = place(&[], &placement).unwrap();

    assert_eq!(body.position, Vector2::new(7.0e10, 0.0));
    assert_eq!(body.velocity.magnitude(), 0.0);
    assert_eq!(body.acceleration, Vector2::zeros());
}

#[test]
fn test_place_with_unmatched_pivot_is_at_rest() {
    let placement = OrbitalPlacement::new("Rogue", EARTH_MASS, EARTH_RADIUS).orbiting(["Vega"], AU);
    let body = place(&[sun()], &placement).unwrap();
    assert_eq!(body.velocity.magnitude(), 0.0);
}

#[test]
fn test_circular_orbit_around_sun() {
    let placement = OrbitalPlacement::new("Earth", EARTH_MASS, EARTH_RADIUS).orbiting(["Sun"], AU);
    let body = place(&[sun()], &placement).unwrap();

    let expected = (G * SOLAR_MASS / AU).sqrt();
    assert_eq!(body.position, Vector2::new(AU, 0.0));
    assert_relative_eq!(body.velocity.x, 0.0);
    assert_relative_eq!(body.velocity.y, expected);
}

#[test]
fn test_orbital_angle_and_retrograde() {
    let placement = OrbitalPlacement::new("Earth", EARTH_MASS, EARTH_RADIUS)
        .orbiting(["Sun"], AU)
        .at_angle(FRAC_PI_2)
        .retrograde();
    let body = place(&[sun()], &placement).unwrap();

    let speed = orbital_speed(SOLAR_MASS, AU);
    assert_relative_eq!(body.position.x, 0.0, epsilon = 1e-3);
    assert_relative_eq!(body.position.y, AU);
    // prograde tangent at 90° is (-1, 0); retrograde flips it
    assert_relative_eq!(body.velocity.x, speed);
    assert_relative_eq!(body.velocity.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_place_relative_to_moving_pivot() {
    let earth = Body::at_rest("Earth", EARTH_MASS, EARTH_RADIUS, Vector2::new(AU, 0.0))
        .with_velocity(Vector2::new(0.0, 29_780.0));
    let placement = OrbitalPlacement::new("Moon", 7.35e22, 1.737e6).orbiting(["Earth"], 3.84e8);
    let moon = place(&[sun(), earth], &placement).unwrap();

    assert_relative_eq!(moon.position.x, AU + 3.84e8, max_relative = 1e-14);
    assert_eq!(moon.position.y, 0.0);
    assert_relative_eq!(
        moon.velocity.y,
        29_780.0 + orbital_speed(EARTH_MASS, 3.84e8),
        max_relative = 1e-14
    );
}

#[test]
fn test_pivot_center_is_mass_weighted() {
    let bodies = vec![
        Body::at_rest("A", 3.0, 0.0, Vector2::new(0.0, 0.0)),
        Body::at_rest("B", 1.0, 0.0, Vector2::new(4.0, 0.0)).with_velocity(Vector2::new(0.0, 4.0)),
        Body::at_rest("C", 100.0, 0.0, Vector2::new(-50.0, 0.0)),
    ];
    let center = pivot_center(&bodies, &["A".to_string(), "B".to_string()]);
    assert_eq!(center.mass, 4.0);
    assert_eq!(center.position, Vector2::new(1.0, 0.0));
    assert_eq!(center.velocity, Vector2::new(0.0, 1.0));
}

#[test]
fn test_duplicate_pivot_names_weigh_twice() {
    let bodies = vec![
        Body::at_rest("A", 1.0, 0.0, Vector2::new(0.0, 0.0)),
        Body::at_rest("B", 1.0, 0.0, Vector2::new(3.0, 0.0)),
    ];
    let pivots = ["A", "A", "B"].map(String::from);
    let center = pivot_center(&bodies, &pivots);
    assert_eq!(center.mass, 3.0);
    assert_eq!(center.position, Vector2::new(1.0, 0.0));
}

#[test]
fn test_orbital_speed_zero_distance() {
    assert_eq!(orbital_speed(SOLAR_MASS, 0.0), 0.0);
    assert_eq!(orbital_speed(0.0, AU), 0.0);
}

#[test]
fn test_day_angle_and_rotation() {
    let placement = OrbitalPlacement::new("Spin", EARTH_MASS, EARTH_RADIUS).rotating(7.27e-5, 1.25);
    let body = place(&[], &placement).unwrap();
    assert_eq!(body.angle, 1.25);
    assert_eq!(body.angular_velocity, 7.27e-5);
}

#[test]
fn test_name_validation() {
    let existing = [sun()];
    assert_eq!(validate_name(&existing, ""), Err(ValidationError::EmptyName));
    assert_eq!(
        validate_name(&existing, "Sun"),
        Err(ValidationError::DuplicateName("Sun".into()))
    );
    assert_eq!(
        validate_name(&existing, "Alpha Centauri"),
        Err(ValidationError::InvalidName("Alpha Centauri".into()))
    );
    assert_eq!(
        validate_name(&existing, ")"),
        Err(ValidationError::InvalidName(")".into()))
    );
    for name in [".", "..", "a/b", "/abs", "a\\b"] {
        assert_eq!(
            validate_name(&existing, name),
            Err(ValidationError::InvalidName(name.into()))
        );
    }
    assert!(validate_name(&existing, "Alpha_Centauri").is_ok());
    assert!(validate_name(&existing, "Proxima.b").is_ok());
}

#[test]
fn test_duplicate_name_rejected_before_placement() {
    let placement = OrbitalPlacement::new("Sun", 1.0, 1.0).orbiting(["Sun"], AU);
    assert_eq!(
        place(&[sun()], &placement),
        Err(ValidationError::DuplicateName("Sun".into()))
    );
}

#[test]
fn test_physical_validation() {
    let mut body = Body::at_rest("X", 0.0, 1.0, Vector2::zeros());
    assert!(matches!(
        validate_body(&[], &body),
        Err(ValidationError::NonPositive { field: "mass", .. })
    ));

    body.mass = 1.0;
    body.radius = -1.0;
    assert!(matches!(
        validate_body(&[], &body),
        Err(ValidationError::Negative { field: "radius", .. })
    ));

    body.radius = 1.0;
    body.velocity.y = f64::INFINITY;
    assert_eq!(
        validate_body(&[], &body),
        Err(ValidationError::NonFinite { field: "velocity" })
    );
}

#[test]
fn test_negative_distance_rejected() {
    let placement = OrbitalPlacement::new("X", 1.0, 1.0).orbiting(["Sun"], -AU);
    assert!(matches!(
        place(&[sun()], &placement),
        Err(ValidationError::Negative { field: "distance", .. })
    ));
}
