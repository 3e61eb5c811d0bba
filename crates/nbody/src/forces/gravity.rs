//! Direct N-body gravity (O(N²) implementation)

use nalgebra::Vector2;

use crate::error::SimulationError;
use crate::forces::{ForceModel, G};
use crate::state::Ensemble;
use crate::vector::unit_direction;

/// Direct pairwise Newtonian gravity.
///
/// Each unordered pair is visited once and its contribution applied to both
/// bodies with opposite signs. The gravitational constant is applied after
/// the pair loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectGravity {
    /// Gravitational constant (m³ kg⁻¹ s⁻²)
    pub g: f64,
}

impl DirectGravity {
    /// Creates a direct gravity force with the SI gravitational constant
    pub fn new() -> Self {
        Self { g: G }
    }

    /// Creates a direct gravity force with a custom gravitational constant
    pub fn with_constant(g: f64) -> Self {
        Self { g }
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn accelerations(&self, ensemble: &Ensemble) -> Result<Vec<Vector2<f64>>, SimulationError> {
        let bodies = &ensemble.bodies;
        let mut accelerations = vec![Vector2::zeros(); bodies.len()];

        for (i, a) in bodies.iter().enumerate() {
            for (j, b) in bodies.iter().enumerate().skip(i + 1) {
                let separation = b.position - a.position;
                let r = unit_direction(&separation).ok_or_else(|| {
                    SimulationError::DegenerateGeometry {
                        first: a.name.clone(),
                        second: b.name.clone(),
                        time: ensemble.time,
                    }
                })?;
                let d2 = separation.dot(&separation);

                accelerations[i] += r * (b.mass / d2);
                accelerations[j] -= r * (a.mass / d2);
            }
        }

        accelerations.iter_mut().for_each(|a| *a *= self.g);
        Ok(accelerations)
    }

    fn potential_energy(&self, ensemble: &Ensemble) -> f64 {
        // Each pair counted once
        ensemble
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                ensemble.bodies[i + 1..]
                    .iter()
                    .map(move |b| -self.g * a.mass * b.mass / a.distance_to(b))
            })
            .sum()
    }
}
