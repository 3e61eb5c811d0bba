use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::body::Body;

/// All body snapshots of a system at one simulation time.
///
/// Body order is fixed for the lifetime of a run; series and distance tables
/// are indexed by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    /// Simulation time in seconds
    pub time: f64,
    pub bodies: Vec<Body>,
}

impl Ensemble {
    /// Creates an ensemble at t = 0
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::state::Ensemble;
    /// use nalgebra::Vector2;
    ///
    /// let ensemble = Ensemble::new(vec![Body::at_rest("Sun", 1.989e30, 6.9634e8, Vector2::zeros())]);
    /// assert_eq!(ensemble.body_count(), 1);
    /// assert_eq!(ensemble.time, 0.0);
    /// ```
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { time: 0.0, bodies }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First body with the given name
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total linear momentum. Conserved by the pairwise force pass up to
    /// floating-point rounding.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Total angular momentum about the origin
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Mass-weighted mean position, `None` for a massless ensemble
    pub fn center_of_mass(&self) -> Option<Vector2<f64>> {
        let mass = self.total_mass();
        if mass > 0.0 {
            let weighted = self
                .bodies
                .iter()
                .fold(Vector2::zeros(), |acc, b| acc + b.position * b.mass);
            Some(weighted / mass)
        } else {
            None
        }
    }
}
