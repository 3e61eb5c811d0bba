//! Planar N-body engine with a radiative-equilibrium temperature model.
//!
//! Bodies are placed relative to the center of mass of existing bodies
//! ([`builder`]), stepped with semi-implicit Euler under direct pairwise
//! gravity ([`integrator`], [`forces`], [`thermal`]) and observed into
//! per-body time series ([`recorder`]). [`System`] ties these together
//! around a canonical body list.

pub mod body;
pub mod builder;
pub mod driver;
pub mod error;
pub mod export;
pub mod forces;
pub mod integrator;
pub mod progress;
pub mod record;
pub mod recorder;
pub mod state;
pub mod system;
pub mod thermal;
pub mod vector;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod integrator_test;

pub use body::Body;
pub use builder::OrbitalPlacement;
pub use error::{RecordError, SimulationError, ValidationError};
pub use integrator::RotationPhase;
pub use progress::ProgressObserver;
pub use recorder::{BodySeries, RunParams, RunResult};
pub use state::Ensemble;
pub use system::System;
