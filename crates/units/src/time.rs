use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::constants::{EARTH_DAY, EARTH_YEAR, TWO_PI};
use crate::error::UnitError;

/// Time units a user can pick from, in selector order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    #[default]
    Seconds,
    EarthDays,
    EarthYears,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::EarthDays, TimeUnit::EarthYears];

    /// Looks up a unit by its selector index.
    pub fn from_index(index: i32) -> Result<Self, UnitError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(UnitError::UnknownIndex {
                kind: "time",
                index,
            })
    }

    /// Selector index of this unit
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Seconds per one of this unit
    pub fn to_si(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::EarthDays => EARTH_DAY,
            TimeUnit::EarthYears => EARTH_YEAR,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::EarthDays => "d",
            TimeUnit::EarthYears => "yr",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "seconds" => Ok(TimeUnit::Seconds),
            "d" | "days" | "earth_days" => Ok(TimeUnit::EarthDays),
            "yr" | "years" | "earth_years" => Ok(TimeUnit::EarthYears),
            _ => Err(UnitError::UnknownName {
                kind: "time",
                name: s.to_string(),
            }),
        }
    }
}

/// Seconds per unit for a time selector index; `0.0` for unknown selectors.
pub fn time_si(index: i32) -> f64 {
    match TimeUnit::from_index(index) {
        Ok(unit) => unit.to_si(),
        Err(_) => 0.0,
    }
}

/// A physical time quantity using f64 precision.
///
/// Seconds are the base unit.
///
/// # Examples
///
/// ```rust
/// use units::{Time, TimeUnit};
///
/// let step = Time::new(1.0, TimeUnit::EarthDays);
/// assert_eq!(step.to_seconds(), 86_400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a time from a value expressed in `unit`.
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        Self(value * unit.to_si())
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn from_days(value: f64) -> Self {
        Self::new(value, TimeUnit::EarthDays)
    }

    pub fn from_years(value: f64) -> Self {
        Self::new(value, TimeUnit::EarthYears)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to Earth days.
    pub fn to_days(&self) -> f64 {
        self.to_unit(TimeUnit::EarthDays)
    }

    /// Converts the time to Earth years.
    pub fn to_years(&self) -> f64 {
        self.to_unit(TimeUnit::EarthYears)
    }

    pub fn to_unit(&self, unit: TimeUnit) -> f64 {
        self.0 / unit.to_si()
    }

    /// Angular velocity (rad/s) of a rotation with this period.
    ///
    /// Returns `None` unless the period is finite and positive.
    pub fn angular_velocity_of_period(&self) -> Option<f64> {
        if self.0 <= 0.0 || !self.0.is_finite() {
            None
        } else {
            Some(TWO_PI / self.0)
        }
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
