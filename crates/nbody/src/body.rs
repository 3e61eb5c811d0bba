use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Snapshot of one celestial body at one instant.
///
/// All quantities are SI. A run never edits a body in place: each step builds
/// a fresh snapshot from the previous ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub mass: f64,                      // kg
    pub radius: f64,                    // m
    pub temperature: f64,               // K
    pub position: Vector2<f64>,         // m
    pub velocity: Vector2<f64>,         // m/s
    pub acceleration: Vector2<f64>,     // m/s²
    pub is_heat_source: bool,
    pub angular_velocity: f64,          // rad/s
    pub angle: f64,                     // rad, self-rotation phase in [0, 2π)
}

impl Body {
    /// Creates a body at rest at `position`, not rotating, at 0 K.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nalgebra::Vector2;
    ///
    /// let moon = Body::at_rest("Moon", 7.35e22, 1.737e6, Vector2::new(3.84e8, 0.0))
    ///     .with_velocity(Vector2::new(0.0, 1022.0));
    /// assert_eq!(moon.speed(), 1022.0);
    /// ```
    pub fn at_rest(name: impl Into<String>, mass: f64, radius: f64, position: Vector2<f64>) -> Self {
        Body {
            name: name.into(),
            mass,
            radius,
            temperature: 0.0,
            position,
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            is_heat_source: false,
            angular_velocity: 0.0,
            angle: 0.0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Marks the body as a heat source with a fixed temperature.
    pub fn heat_source(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self.is_heat_source = true;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_rotation(mut self, angular_velocity: f64, angle: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self.angle = angle;
        self
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Orbital speed, the magnitude of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Angular momentum per unit mass about the origin (z-component of r × v)
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.x * self.velocity.y - self.position.y * self.velocity.x
    }

    /// Surface point that marks the current rotation phase
    pub fn rotation_point(&self) -> Vector2<f64> {
        self.position + self.radius * Vector2::new(self.angle.sin(), self.angle.cos())
    }

    /// Polar angle of the position about the origin
    pub fn origin_angle(&self) -> f64 {
        self.position.y.atan2(self.position.x)
    }

    /// True when position, velocity, acceleration and temperature are all finite
    pub fn is_finite(&self) -> bool {
        crate::vector::is_finite(&self.position)
            && crate::vector::is_finite(&self.velocity)
            && crate::vector::is_finite(&self.acceleration)
            && self.temperature.is_finite()
    }
}
