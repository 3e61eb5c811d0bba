use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::constants::{EARTH_MASS, SOLAR_MASS};
use crate::error::UnitError;

/// Mass units a user can pick from, in selector order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    #[default]
    Kilograms,
    EarthMasses,
    SolarMasses,
}

impl MassUnit {
    pub const ALL: [MassUnit; 3] = [
        MassUnit::Kilograms,
        MassUnit::EarthMasses,
        MassUnit::SolarMasses,
    ];

    /// Looks up a unit by its selector index.
    pub fn from_index(index: i32) -> Result<Self, UnitError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(UnitError::UnknownIndex {
                kind: "mass",
                index,
            })
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    /// Kilograms per one of this unit
    pub fn to_si(self) -> f64 {
        match self {
            MassUnit::Kilograms => 1.0,
            MassUnit::EarthMasses => EARTH_MASS,
            MassUnit::SolarMasses => SOLAR_MASS,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilograms => "kg",
            MassUnit::EarthMasses => "M_earth",
            MassUnit::SolarMasses => "M_sun",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MassUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" | "kilograms" => Ok(MassUnit::Kilograms),
            "m_earth" | "earth_masses" => Ok(MassUnit::EarthMasses),
            "m_sun" | "solar_masses" => Ok(MassUnit::SolarMasses),
            _ => Err(UnitError::UnknownName {
                kind: "mass",
                name: s.to_string(),
            }),
        }
    }
}

/// Kilograms per unit for a mass selector index; `0.0` for unknown selectors.
pub fn mass_si(index: i32) -> f64 {
    match MassUnit::from_index(index) {
        Ok(unit) => unit.to_si(),
        Err(_) => 0.0,
    }
}

/// A physical mass quantity using f64 precision.
///
/// Kilograms are the base unit.
///
/// # Examples
///
/// ```rust
/// use units::{Mass, MassUnit};
///
/// let sun = Mass::from_solar_masses(1.0);
/// assert_eq!(sun.to_kg(), 1.989e30);
/// assert_eq!(Mass::new(2.0, MassUnit::Kilograms).to_kg(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a mass from a value expressed in `unit`.
    pub fn new(value: f64, unit: MassUnit) -> Self {
        Self(value * unit.to_si())
    }

    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_masses(value: f64) -> Self {
        Self::new(value, MassUnit::EarthMasses)
    }

    pub fn from_solar_masses(value: f64) -> Self {
        Self::new(value, MassUnit::SolarMasses)
    }

    /// Returns the mass in kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.to_unit(MassUnit::EarthMasses)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.to_unit(MassUnit::SolarMasses)
    }

    pub fn to_unit(&self, unit: MassUnit) -> f64 {
        self.0 / unit.to_si()
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
