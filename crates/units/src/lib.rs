//! SI unit selectors, conversion tables and physical constants.
//!
//! Every quantity the engine integrates is SI (meters, seconds, kilograms).
//! User-facing values arrive as a number plus a unit selector; the selector
//! tables here turn them into SI scale factors.

pub mod constants;
pub mod error;
pub mod length;
pub mod mass;
pub mod time;

#[cfg(test)]
mod time_test;

pub use error::UnitError;
pub use length::{length_si, Length, LengthUnit};
pub use mass::{mass_si, Mass, MassUnit};
pub use time::{time_si, Time, TimeUnit};
