//! Physical constants in SI units.
//!
//! Some values are rounded, e.g. `AU = 1.5e11` rather than the IAU value.

use std::f64::consts::PI;

/// Newtonian gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.6743e-11;

/// Astronomical unit in meters
pub const AU: f64 = 1.50e11;

/// Solar mass in kilograms
pub const SOLAR_MASS: f64 = 1.989e30;

/// Solar effective temperature in Kelvin
pub const SUN_TEMPERATURE: f64 = 5772.0;

/// Solar radius in meters
pub const SUN_RADIUS: f64 = 6.9634e8;

/// Earth year (365 days) in seconds
pub const EARTH_YEAR: f64 = 3.1536e7;

/// Earth mass in kilograms
pub const EARTH_MASS: f64 = 5.97219e24;

/// Earth radius in meters
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Earth day in seconds
pub const EARTH_DAY: f64 = 86_400.0;

/// Geometric dilution factor of the radiative-equilibrium estimate
pub const ONE_OVER_SQRT_2: f64 = 0.70710678118;

/// Light year in meters
pub const LIGHT_YEAR: f64 = 9.4605284e15;

/// Parsec in meters
pub const PARSEC: f64 = 3.08567758e16;

/// Full turn in radians
pub const TWO_PI: f64 = 2.0 * PI;
