//! Radiative-equilibrium temperature model.
//!
//! A body that is not a heat source takes the temperature
//!
//! ```text
//! T_i = (Σ_{k≠i} T_k⁴ · R_k² / D_ik²)^¼ · 1/√2
//! ```
//!
//! where `D_ik` is the distance between the bodies in the snapshot the step
//! starts from. The `1/√2` factor is a fixed geometric dilution, not a view
//! factor. Heat sources keep their own temperature.

use units::constants::ONE_OVER_SQRT_2;

use crate::state::Ensemble;

/// Scalar temperature update applied once per body per step
pub trait ThermalModel: Send + Sync {
    /// Temperature of body `idx` after a step taken from `ensemble` (K)
    fn temperature(&self, idx: usize, ensemble: &Ensemble) -> f64;
}

/// Irradiation-only equilibrium estimate with a constant dilution factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiativeEquilibrium {
    pub dilution: f64,
}

impl RadiativeEquilibrium {
    pub fn new() -> Self {
        Self {
            dilution: ONE_OVER_SQRT_2,
        }
    }
}

impl Default for RadiativeEquilibrium {
    fn default() -> Self {
        Self::new()
    }
}

impl ThermalModel for RadiativeEquilibrium {
    fn temperature(&self, idx: usize, ensemble: &Ensemble) -> f64 {
        let body = &ensemble.bodies[idx];
        if body.is_heat_source {
            return body.temperature;
        }

        let flux: f64 = ensemble
            .bodies
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != idx)
            .map(|(_, other)| {
                let d = body.position - other.position;
                other.temperature.powf(4.0) * (other.radius * other.radius) / d.dot(&d)
            })
            .sum();

        flux.powf(0.25) * self.dilution
    }
}

/// Steady-state temperature of a body at `distance` from a single heat
/// source of temperature `source_temperature` and radius `source_radius`.
pub fn equilibrium_temperature(source_temperature: f64, source_radius: f64, distance: f64) -> f64 {
    source_temperature * (source_radius / distance).sqrt() * ONE_OVER_SQRT_2
}
