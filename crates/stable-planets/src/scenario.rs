//! Scenario files for the command line.
//!
//! A scenario is a YAML document with run parameters and a list of bodies.
//! Bodies are added in file order, so a body can only orbit bodies listed
//! before it.
//!
//! ```yaml
//! run:
//!   duration: 1
//!   duration_unit: earth_years
//!   timestep: 1
//!   timestep_unit: earth_days
//! rotation: recomputed      # or "accumulated"
//!
//! bodies:
//!   - name: Sun
//!     mass: 1
//!     mass_unit: solar_masses
//!     radius: 6.9634e8
//!     heat_source: true
//!     temperature: 5772
//!   - name: Earth
//!     mass: 1
//!     mass_unit: earth_masses
//!     radius: 1
//!     radius_unit: earth_radii
//!     orbit:
//!       pivots: [Sun]
//!       distance: 1
//!       distance_unit: astronomical_units
//!     rotation:
//!       period: 1
//!       unit: earth_days
//! ```
//!
//! Instead of `orbit`, a body may give its explicit `state` in SI units.
//! Giving both is an error.

use serde::Deserialize;

use nbody::error::ValidationError;
use nbody::vector::Vector2;
use nbody::{Body, OrbitalPlacement, RotationPhase, RunParams, System};
use units::{Length, LengthUnit, Mass, MassUnit, Time, TimeUnit};

/// Top-level scenario document
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub run: RunConfig,
    #[serde(default)]
    pub rotation: RotationPhase,
    pub bodies: Vec<BodyConfig>,
}

/// Duration and timestep, each with its own unit
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RunConfig {
    pub duration: f64,
    #[serde(default = "seconds")]
    pub duration_unit: TimeUnit,
    pub timestep: f64,
    #[serde(default = "seconds")]
    pub timestep_unit: TimeUnit,
}

fn seconds() -> TimeUnit {
    TimeUnit::Seconds
}

fn kilograms() -> MassUnit {
    MassUnit::Kilograms
}

fn meters() -> LengthUnit {
    LengthUnit::Meters
}

impl RunConfig {
    pub fn params(&self) -> RunParams {
        RunParams::new(
            Time::new(self.duration, self.duration_unit).to_seconds(),
            Time::new(self.timestep, self.timestep_unit).to_seconds(),
        )
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,
    #[serde(default = "kilograms")]
    pub mass_unit: MassUnit,
    pub radius: f64,
    #[serde(default = "meters")]
    pub radius_unit: LengthUnit,
    #[serde(default)]
    pub heat_source: bool,
    /// K. Required for heat sources.
    pub temperature: Option<f64>,
    pub orbit: Option<OrbitConfig>,
    pub rotation: Option<RotationConfig>,
    pub state: Option<StateConfig>,
}

/// Placement relative to the center of mass of `pivots`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrbitConfig {
    #[serde(default)]
    pub pivots: Vec<String>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub distance_unit: LengthUnit,
    /// rad
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub inverted: bool,
}

/// Self-rotation given as a period
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RotationConfig {
    pub period: f64,
    #[serde(default = "seconds")]
    pub unit: TimeUnit,
    /// Initial phase, rad
    #[serde(default)]
    pub day_angle: f64,
}

/// Explicit initial state, SI
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct StateConfig {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    #[serde(default)]
    pub acceleration: [f64; 2],
}

impl RotationConfig {
    fn angular_velocity(&self) -> Result<f64, ValidationError> {
        let period = Time::new(self.period, self.unit);
        period
            .angular_velocity_of_period()
            .ok_or(ValidationError::NonPositive {
                field: "rotation period",
                value: period.to_seconds(),
            })
    }
}

impl BodyConfig {
    fn temperature(&self) -> Result<f64, ValidationError> {
        match (self.heat_source, self.temperature) {
            (true, None) => Err(ValidationError::MissingField("temperature")),
            (_, t) => Ok(t.unwrap_or(0.0)),
        }
    }

    fn rotation(&self) -> Result<(f64, f64), ValidationError> {
        match &self.rotation {
            Some(rotation) => Ok((rotation.angular_velocity()?, rotation.day_angle)),
            None => Ok((0.0, 0.0)),
        }
    }

    /// Adds this body to `system`, by explicit state when one is given and
    /// by orbital placement otherwise.
    pub fn add_to(&self, system: &mut System) -> Result<(), ValidationError> {
        if self.orbit.is_some() && self.state.is_some() {
            return Err(ValidationError::Conflicting {
                first: "orbit",
                second: "state",
            });
        }

        let mass = Mass::new(self.mass, self.mass_unit).to_kg();
        let radius = Length::new(self.radius, self.radius_unit).to_meters();
        let temperature = self.temperature()?;
        let (angular_velocity, day_angle) = self.rotation()?;

        if let Some(state) = &self.state {
            let body = Body {
                name: self.name.clone(),
                mass,
                radius,
                temperature,
                position: Vector2::from(state.position),
                velocity: Vector2::from(state.velocity),
                acceleration: Vector2::from(state.acceleration),
                is_heat_source: self.heat_source,
                angular_velocity,
                angle: day_angle,
            };
            system.add_body(body)?;
            return Ok(());
        }

        let orbit = self.orbit.clone().unwrap_or_default();
        let mut placement = OrbitalPlacement::new(self.name.clone(), mass, radius)
            .orbiting(orbit.pivots, Length::new(orbit.distance, orbit.distance_unit).to_meters())
            .at_angle(orbit.angle)
            .rotating(angular_velocity, day_angle);
        placement.temperature = temperature;
        placement.is_heat_source = self.heat_source;
        placement.inverted = orbit.inverted;

        system.add_orbiting(&placement)?;
        Ok(())
    }
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Builds the system described by the scenario.
    pub fn build_system(&self) -> Result<System, ValidationError> {
        let mut system = System::with_rotation(self.rotation);
        for body in &self.bodies {
            body.add_to(&mut system)?;
        }
        Ok(system)
    }
}
