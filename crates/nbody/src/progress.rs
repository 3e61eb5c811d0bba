//! Progress reporting for long-running calls.
//!
//! Runs and exports report `(percent, message)` pairs at coarse checkpoints:
//! once per integration step, once per body during post-processing and once
//! per body during export. The engine never knows what displays them.

/// Receives progress checkpoints
pub trait ProgressObserver {
    /// `percent` is in `0..=100`
    fn on_progress(&mut self, percent: u8, message: &str);
}

impl<F> ProgressObserver for F
where
    F: FnMut(u8, &str),
{
    fn on_progress(&mut self, percent: u8, message: &str) {
        self(percent, message)
    }
}

/// Discards every checkpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressObserver for Silent {
    fn on_progress(&mut self, _percent: u8, _message: &str) {}
}

/// Rounded percentage of `done` over `total`, clamped to `0..=100`
pub(crate) fn percent(done: f64, total: f64) -> u8 {
    if total <= 0.0 {
        return 0;
    }
    (100.0 * done / total).round().clamp(0.0, 100.0) as u8
}
