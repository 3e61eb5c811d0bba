//! Construction of new bodies from orbital placement parameters.
//!
//! A new body is placed relative to the mass-weighted center of a set of
//! existing "pivot" bodies: at `distance` from that center along
//! `orbital_angle`, moving with the center's velocity plus the circular
//! orbital speed around the pivots' combined mass.

use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use units::constants::G;

use crate::body::Body;
use crate::error::ValidationError;
use crate::vector::{radial, tangent};

/// Everything needed to synthesize a body in orbit around a pivot set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalPlacement {
    pub name: String,
    pub mass: f64,               // kg
    pub radius: f64,             // m
    pub distance: f64,           // m, from the pivot center
    pub pivots: Vec<String>,
    pub angular_velocity: f64,   // rad/s
    pub temperature: f64,        // K
    pub is_heat_source: bool,
    pub orbital_angle: f64,      // rad
    /// Retrograde orbit when set
    pub inverted: bool,
    /// Initial self-rotation phase
    pub day_angle: f64,
}

impl OrbitalPlacement {
    /// A placement at the origin with no pivots, no rotation and 0 K.
    pub fn new(name: impl Into<String>, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            distance: 0.0,
            pivots: Vec::new(),
            angular_velocity: 0.0,
            temperature: 0.0,
            is_heat_source: false,
            orbital_angle: 0.0,
            inverted: false,
            day_angle: 0.0,
        }
    }

    /// Orbit the center of mass of `pivots` at `distance`
    pub fn orbiting<S: Into<String>>(
        mut self,
        pivots: impl IntoIterator<Item = S>,
        distance: f64,
    ) -> Self {
        self.pivots = pivots.into_iter().map(Into::into).collect();
        self.distance = distance;
        self
    }

    pub fn at_angle(mut self, orbital_angle: f64) -> Self {
        self.orbital_angle = orbital_angle;
        self
    }

    pub fn retrograde(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn heat_source(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self.is_heat_source = true;
        self
    }

    pub fn rotating(mut self, angular_velocity: f64, day_angle: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self.day_angle = day_angle;
        self
    }
}

/// Mass-weighted center of a pivot set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotCenter {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub mass: f64,
}

/// Mass-weighted center of position and velocity of the bodies named in
/// `pivots`.
///
/// Every (body, pivot name) match contributes, so a name listed twice is
/// weighted twice. With no match the center is the origin at rest and the
/// mass is zero.
pub fn pivot_center(bodies: &[Body], pivots: &[String]) -> PivotCenter {
    let mut position = Vector2::zeros();
    let mut velocity = Vector2::zeros();
    let mut mass = 0.0;

    for body in bodies {
        for pivot in pivots {
            if body.name == *pivot {
                position += body.position * body.mass;
                velocity += body.velocity * body.mass;
                mass += body.mass;
            }
        }
    }

    if mass > 0.0 {
        position /= mass;
        velocity /= mass;
    }

    PivotCenter {
        position,
        velocity,
        mass,
    }
}

/// Circular orbital speed `sqrt(G·M/d)` around a mass `mass_sum` at
/// `distance`; zero when the distance is zero.
pub fn orbital_speed(mass_sum: f64, distance: f64) -> f64 {
    if distance == 0.0 {
        0.0
    } else {
        (G * mass_sum / distance).sqrt().abs()
    }
}

/// Checks that a name survives the record format and can name an export
/// directory.
pub(crate) fn check_storable_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let unstorable = name
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        || matches!(name, "(" | ")" | "." | "..");
    if unstorable {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Checks a body name against the names already in use.
pub fn validate_name(existing: &[Body], name: &str) -> Result<(), ValidationError> {
    check_storable_name(name)?;
    if existing.iter().any(|b| b.name == name) {
        return Err(ValidationError::DuplicateName(name.to_string()));
    }
    Ok(())
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value < 0.0 {
        Err(ValidationError::Negative { field, value })
    } else {
        Ok(())
    }
}

/// Validates a fully specified body before it joins `existing`.
pub fn validate_body(existing: &[Body], body: &Body) -> Result<(), ValidationError> {
    validate_name(existing, &body.name)?;

    require_finite("mass", body.mass)?;
    if body.mass <= 0.0 {
        return Err(ValidationError::NonPositive {
            field: "mass",
            value: body.mass,
        });
    }
    require_non_negative("radius", body.radius)?;
    require_non_negative("temperature", body.temperature)?;
    require_finite("angular velocity", body.angular_velocity)?;
    require_finite("angle", body.angle)?;

    let vectors = [
        ("position", &body.position),
        ("velocity", &body.velocity),
        ("acceleration", &body.acceleration),
    ];
    for (field, v) in vectors {
        if !crate::vector::is_finite(v) {
            return Err(ValidationError::NonFinite { field });
        }
    }
    Ok(())
}

/// Synthesizes the initial state of a body from its orbital placement.
///
/// # Examples
///
/// ```
/// use nbody::builder::{place, OrbitalPlacement};
///
/// // No pivots: the body sits `distance` along the x axis, at rest.
/// let body = place(&[], &OrbitalPlacement::new("Rogue", 1.0e24, 1.0e6).orbiting(Vec::<String>::new(), 5.0)).unwrap();
/// assert_eq!(body.position.x, 5.0);
/// assert_eq!(body.velocity.magnitude(), 0.0);
/// ```
pub fn place(existing: &[Body], placement: &OrbitalPlacement) -> Result<Body, ValidationError> {
    validate_name(existing, &placement.name)?;
    require_non_negative("distance", placement.distance)?;
    require_finite("orbital angle", placement.orbital_angle)?;

    let center = pivot_center(existing, &placement.pivots);
    let speed = orbital_speed(center.mass, placement.distance);

    let position = center.position + placement.distance * radial(placement.orbital_angle);
    let orbit = speed * tangent(placement.orbital_angle);
    let velocity = if placement.inverted {
        center.velocity - orbit
    } else {
        center.velocity + orbit
    };

    let body = Body {
        name: placement.name.clone(),
        mass: placement.mass,
        radius: placement.radius,
        temperature: placement.temperature,
        position,
        velocity,
        acceleration: Vector2::zeros(),
        is_heat_source: placement.is_heat_source,
        angular_velocity: placement.angular_velocity,
        angle: placement.day_angle,
    };
    validate_body(existing, &body)?;

    debug!(
        "Placed {}: pos({}, {}), vel({}, {})",
        body.name, position.x, position.y, velocity.x, velocity.y
    );
    Ok(body)
}
