//! Time integration for N-body systems
//!
//! Integrators map one ensemble snapshot to the next. Every body of the new
//! snapshot is computed from the same previous snapshot, so there is no
//! ordering dependency between bodies inside a step.

use serde::{Deserialize, Serialize};
use units::constants::TWO_PI;

use crate::body::Body;
use crate::error::SimulationError;
use crate::forces::ForceModel;
use crate::state::Ensemble;
use crate::thermal::ThermalModel;

/// Beyond this many turns the phase is reduced with `rem_euclid` before the
/// turn-by-turn wrap.
const WRAP_LOOP_LIMIT: f64 = 64.0 * TWO_PI;

/// A fixed-step time integrator for N-body ensembles
pub trait Integrator: Send + Sync {
    /// Advance the ensemble by one timestep
    ///
    /// # Arguments
    ///
    /// * `ensemble` - Snapshot at the start of the step
    /// * `dt` - Timestep in seconds
    /// * `force` - Force model to compute accelerations
    /// * `thermal` - Temperature model
    ///
    /// # Returns
    ///
    /// The snapshot at `ensemble.time + dt`
    fn step(
        &self,
        ensemble: &Ensemble,
        dt: f64,
        force: &dyn ForceModel,
        thermal: &dyn ThermalModel,
    ) -> Result<Ensemble, SimulationError>;

    /// Advance the ensemble by `n_steps` timesteps
    fn integrate(
        &self,
        ensemble: &Ensemble,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
        thermal: &dyn ThermalModel,
    ) -> Result<Ensemble, SimulationError> {
        let mut current = ensemble.clone();
        for _ in 0..n_steps {
            current = self.step(&current, dt, force, thermal)?;
        }
        Ok(current)
    }
}

/// How the self-rotation phase evolves from step to step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPhase {
    /// `angle' = dt · ω` every step, so the phase does not build up over a
    /// run.
    #[default]
    Recomputed,
    /// `angle' = angle + dt · ω`
    Accumulated,
}

impl RotationPhase {
    /// Phase of a body after one step
    pub fn advance(self, angle: f64, angular_velocity: f64, dt: f64) -> f64 {
        let raw = match self {
            RotationPhase::Recomputed => dt * angular_velocity,
            RotationPhase::Accumulated => angle + dt * angular_velocity,
        };
        wrap_angle(raw)
    }
}

/// Brings an angle into `[0, 2π)` by whole turns.
///
/// Angles within 64 turns are reduced one turn at a time. Larger ones are
/// first reduced with `rem_euclid`, which can differ from turn-by-turn
/// subtraction in the last bits.
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let mut angle = if angle.abs() > WRAP_LOOP_LIMIT {
        angle.rem_euclid(TWO_PI)
    } else {
        angle
    };
    while angle >= TWO_PI {
        angle -= TWO_PI;
    }
    while angle < 0.0 {
        angle += TWO_PI;
    }
    // Adding a turn to a tiny negative angle can round up to exactly 2π
    if angle >= TWO_PI {
        angle = 0.0;
    }
    angle
}

/// Semi-implicit (symplectic) Euler integrator
///
/// 1. a = F(x)
/// 2. v' = v + dt · a
/// 3. x' = x + dt · v'
///
/// The position update uses the already-updated velocity. Temperatures come
/// from the thermal model evaluated on the pre-step snapshot.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::DirectGravity;
/// use nbody::integrator::{Integrator, SemiImplicitEuler};
/// use nbody::state::Ensemble;
/// use nbody::thermal::RadiativeEquilibrium;
/// use nalgebra::Vector2;
///
/// let ensemble = Ensemble::new(vec![
///     Body::at_rest("Sun", 1.989e30, 6.9634e8, Vector2::zeros()).heat_source(5772.0),
///     Body::at_rest("Earth", 5.97219e24, 6.371e6, Vector2::new(1.5e11, 0.0))
///         .with_velocity(Vector2::new(0.0, 29_750.0)),
/// ]);
///
/// let next = SemiImplicitEuler::default()
///     .step(&ensemble, 3600.0, &DirectGravity::new(), &RadiativeEquilibrium::new())
///     .unwrap();
/// assert_eq!(next.time, 3600.0);
/// assert!(next.bodies[1].temperature > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemiImplicitEuler {
    #[serde(default)]
    pub rotation: RotationPhase,
}

impl SemiImplicitEuler {
    pub fn new(rotation: RotationPhase) -> Self {
        Self { rotation }
    }
}

impl Integrator for SemiImplicitEuler {
    fn step(
        &self,
        ensemble: &Ensemble,
        dt: f64,
        force: &dyn ForceModel,
        thermal: &dyn ThermalModel,
    ) -> Result<Ensemble, SimulationError> {
        let accelerations = force.accelerations(ensemble)?;
        let time = ensemble.time + dt;

        let bodies = ensemble
            .bodies
            .iter()
            .zip(accelerations)
            .enumerate()
            .map(|(i, (body, acceleration))| {
                let velocity = body.velocity + acceleration * dt;
                let position = body.position + velocity * dt;
                let next = Body {
                    position,
                    velocity,
                    acceleration,
                    temperature: thermal.temperature(i, ensemble),
                    angle: self
                        .rotation
                        .advance(body.angle, body.angular_velocity, dt),
                    ..body.clone()
                };
                if next.is_finite() {
                    Ok(next)
                } else {
                    Err(SimulationError::NonFinite {
                        body: body.name.clone(),
                        time,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ensemble { time, bodies })
    }
}
