//! Force models for N-body simulations
//!
//! A force model turns one ensemble snapshot into one acceleration per body.
//! Models see the whole snapshot at once so pairwise interactions can be
//! evaluated once per pair.

use nalgebra::Vector2;

use crate::error::SimulationError;
use crate::state::Ensemble;

pub mod gravity;


pub use gravity::DirectGravity;
pub use units::constants::G;

/// A source of acceleration on bodies in an N-body system
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::{DirectGravity, ForceModel};
/// use nbody::state::Ensemble;
/// use nalgebra::Vector2;
///
/// let ensemble = Ensemble::new(vec![
///     Body::at_rest("Sun", 1.989e30, 6.9634e8, Vector2::zeros()),
///     Body::at_rest("Earth", 5.97219e24, 6.371e6, Vector2::new(1.5e11, 0.0)),
/// ]);
///
/// let accelerations = DirectGravity::new().accelerations(&ensemble).unwrap();
/// // Earth is pulled back toward the Sun
/// assert!(accelerations[1].x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Acceleration of every body in `ensemble`, in ensemble order (m/s²)
    ///
    /// Fails when the snapshot has no well-defined force, e.g. two bodies
    /// at the same position.
    fn accelerations(&self, ensemble: &Ensemble) -> Result<Vec<Vector2<f64>>, SimulationError>;

    /// Potential energy of the snapshot (J). Defaults to zero for models
    /// without a potential.
    fn potential_energy(&self, _ensemble: &Ensemble) -> f64 {
        0.0
    }
}
