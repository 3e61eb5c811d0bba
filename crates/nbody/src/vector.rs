//! Two-dimensional vector helpers on top of nalgebra.
//!
//! `Vector2<f64>` already provides addition, subtraction, scaling from either
//! side, dot product and magnitude. Normalizing a zero vector is the one
//! operation with no defined result, so the engine goes through
//! [`unit_direction`] instead of `normalize()`.

pub use nalgebra::Vector2;

/// Unit vector along `v`, or `None` when `v` has no usable direction
/// (zero length or non-finite components).
///
/// # Examples
///
/// ```
/// use nbody::vector::{unit_direction, Vector2};
///
/// let r = unit_direction(&Vector2::new(3.0, 4.0)).unwrap();
/// assert!((r.x - 0.6).abs() < 1e-12);
/// assert!(unit_direction(&Vector2::zeros()).is_none());
/// ```
pub fn unit_direction(v: &Vector2<f64>) -> Option<Vector2<f64>> {
    let magnitude = v.magnitude();
    if magnitude > 0.0 && magnitude.is_finite() {
        Some(v * (1.0 / magnitude))
    } else {
        None
    }
}

/// Point on the unit circle at `angle` radians: `(cos, sin)`
pub fn radial(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin())
}

/// Counter-clockwise tangent of the unit circle at `angle`: `(-sin, cos)`
pub fn tangent(angle: f64) -> Vector2<f64> {
    Vector2::new(-angle.sin(), angle.cos())
}

/// True when both components are finite
pub fn is_finite(v: &Vector2<f64>) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
