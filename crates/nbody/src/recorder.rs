//! Time series recorded during a run and the quantities derived from them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::progress::{percent, ProgressObserver};
use crate::state::Ensemble;

/// Run parameters in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Total simulated time T
    pub duration: f64,
    /// Fixed step dT
    pub timestep: f64,
}

impl RunParams {
    pub fn new(duration: f64, timestep: f64) -> Self {
        Self { duration, timestep }
    }

    /// Both values must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("duration", self.duration), ("timestep", self.timestep)] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ValidationError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Every series recorded for one body, aligned with [`RunResult::times`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodySeries {
    pub name: String,
    /// K
    pub temperature: Vec<f64>,
    /// Orbital speed, m/s
    pub speed: Vec<f64>,
    /// Rate of change of the orbital speed, m/s²
    pub acceleration: Vec<f64>,
    /// Position components, m
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl BodySeries {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Output of one complete run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub params: RunParams,
    /// Time at the start of each recorded step, s
    pub times: Vec<f64>,
    pub bodies: Vec<BodySeries>,
    /// `distances[i][j]` is the distance series from body i to body j, m.
    /// The diagonal is empty.
    pub distances: Vec<Vec<Vec<f64>>>,
    /// Snapshot after the last step
    pub final_state: Ensemble,
}

impl RunResult {
    pub fn sample_count(&self) -> usize {
        self.times.len()
    }

    /// Series of the first body with the given name
    pub fn body(&self, name: &str) -> Option<&BodySeries> {
        self.bodies.iter().find(|s| s.name == name)
    }

    /// Distance series between two named bodies
    pub fn distance_between(&self, from: &str, to: &str) -> Option<&[f64]> {
        let i = self.bodies.iter().position(|s| s.name == from)?;
        let j = self.bodies.iter().position(|s| s.name == to)?;
        if i == j {
            return None;
        }
        Some(&self.distances[i][j])
    }
}

/// Accumulates per-step observables during a run
#[derive(Debug, Clone)]
pub struct SeriesRecorder {
    times: Vec<f64>,
    bodies: Vec<BodySeries>,
    distances: Vec<Vec<Vec<f64>>>,
}

impl SeriesRecorder {
    /// Allocates one series set per body of `ensemble`
    pub fn new(ensemble: &Ensemble) -> Self {
        let n = ensemble.body_count();
        Self {
            times: Vec::new(),
            bodies: ensemble.bodies.iter().map(|b| BodySeries::new(&b.name)).collect(),
            distances: vec![vec![Vec::new(); n]; n],
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Records the snapshot produced by the step that started at `time`.
    pub fn record(&mut self, time: f64, ensemble: &Ensemble) {
        self.times.push(time);
        for (i, body) in ensemble.bodies.iter().enumerate() {
            let series = &mut self.bodies[i];
            series.temperature.push(body.temperature);
            series.speed.push(body.speed());
            series.x.push(body.position.x);
            series.y.push(body.position.y);

            for (j, other) in ensemble.bodies.iter().enumerate() {
                if i != j {
                    self.distances[i][j].push((body.position - other.position).magnitude());
                }
            }
        }
    }

    /// Derives the speed-change series and packages the result.
    ///
    /// Reports one checkpoint per body, then `(0, "Done!")`.
    pub fn finish(
        mut self,
        params: RunParams,
        final_state: Ensemble,
        observer: &mut dyn ProgressObserver,
    ) -> RunResult {
        let n = self.bodies.len();
        for (i, series) in self.bodies.iter_mut().enumerate() {
            let pct = percent(i as f64, n as f64);
            observer.on_progress(pct, &format!("Extracting additional data... ({pct} %)"));
            series.acceleration = speed_derivative(&series.speed, params.timestep);
        }
        observer.on_progress(0, "Done!");

        RunResult {
            params,
            times: self.times,
            bodies: self.bodies,
            distances: self.distances,
            final_state,
        }
    }
}

/// Backward finite difference of a speed series.
///
/// The first element is zero; element k is `(speed[k] - speed[k-1]) / dt`.
/// This is the rate of change of scalar speed, not the gravitational
/// acceleration vector.
///
/// # Examples
///
/// ```
/// use nbody::recorder::speed_derivative;
///
/// assert_eq!(speed_derivative(&[1.0, 3.0, 2.0], 0.5), vec![0.0, 4.0, -2.0]);
/// assert!(speed_derivative(&[], 1.0).is_empty());
/// ```
pub fn speed_derivative(speed: &[f64], dt: f64) -> Vec<f64> {
    if speed.is_empty() {
        return Vec::new();
    }
    std::iter::once(0.0)
        .chain(speed.windows(2).map(|w| (w[1] - w[0]) / dt))
        .collect()
}
