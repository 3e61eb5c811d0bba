use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::constants::{AU, EARTH_RADIUS, LIGHT_YEAR, PARSEC};
use crate::error::UnitError;

/// Length units a user can pick from, in selector order.
///
/// The discriminant order is the one user interfaces present (meters first,
/// parsecs last) and is what [`length_si`] indexes into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Meters,
    Kilometers,
    EarthRadii,
    AstronomicalUnits,
    LightYears,
    Parsecs,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::EarthRadii,
        LengthUnit::AstronomicalUnits,
        LengthUnit::LightYears,
        LengthUnit::Parsecs,
    ];

    /// Looks up a unit by its selector index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::LengthUnit;
    ///
    /// assert_eq!(LengthUnit::from_index(3), Ok(LengthUnit::AstronomicalUnits));
    /// assert!(LengthUnit::from_index(6).is_err());
    /// ```
    pub fn from_index(index: i32) -> Result<Self, UnitError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(UnitError::UnknownIndex {
                kind: "length",
                index,
            })
    }

    /// Selector index of this unit
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Meters per one of this unit
    pub fn to_si(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 1000.0,
            LengthUnit::EarthRadii => EARTH_RADIUS,
            LengthUnit::AstronomicalUnits => AU,
            LengthUnit::LightYears => LIGHT_YEAR,
            LengthUnit::Parsecs => PARSEC,
        }
    }

    /// Short label used in column headers
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
            LengthUnit::EarthRadii => "R_earth",
            LengthUnit::AstronomicalUnits => "AU",
            LengthUnit::LightYears => "ly",
            LengthUnit::Parsecs => "pc",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meters" => Ok(LengthUnit::Meters),
            "km" | "kilometers" => Ok(LengthUnit::Kilometers),
            "r_earth" | "earth_radii" => Ok(LengthUnit::EarthRadii),
            "au" | "astronomical_units" => Ok(LengthUnit::AstronomicalUnits),
            "ly" | "light_years" => Ok(LengthUnit::LightYears),
            "pc" | "parsecs" => Ok(LengthUnit::Parsecs),
            _ => Err(UnitError::UnknownName {
                kind: "length",
                name: s.to_string(),
            }),
        }
    }
}

/// Meters per unit for a length selector index.
///
/// Unknown selectors convert to `0.0`, so a value multiplied by the result
/// silently becomes zero. Use [`LengthUnit::from_index`] to reject them.
pub fn length_si(index: i32) -> f64 {
    match LengthUnit::from_index(index) {
        Ok(unit) => unit.to_si(),
        Err(_) => 0.0,
    }
}

/// A physical length quantity using f64 precision.
///
/// Meters are the base unit, matching the SI state the engine integrates.
///
/// # Examples
///
/// ```rust
/// use units::{Length, LengthUnit};
///
/// let orbit = Length::new(1.0, LengthUnit::AstronomicalUnits);
/// assert_eq!(orbit.to_meters(), 1.5e11);
/// assert_eq!(orbit.to_unit(LengthUnit::Kilometers), 1.5e8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a length from a value expressed in `unit`.
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self(value * unit.to_si())
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self::new(value, LengthUnit::Kilometers)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self::new(value, LengthUnit::EarthRadii)
    }

    pub fn from_au(value: f64) -> Self {
        Self::new(value, LengthUnit::AstronomicalUnits)
    }

    pub fn from_light_years(value: f64) -> Self {
        Self::new(value, LengthUnit::LightYears)
    }

    pub fn from_parsecs(value: f64) -> Self {
        Self::new(value, LengthUnit::Parsecs)
    }

    /// Returns the length in meters.
    pub fn to_meters(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.to_unit(LengthUnit::Kilometers)
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.to_unit(LengthUnit::AstronomicalUnits)
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.to_unit(LengthUnit::EarthRadii)
    }

    /// Converts the length to an arbitrary selectable unit.
    pub fn to_unit(&self, unit: LengthUnit) -> f64 {
        self.0 / unit.to_si()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
