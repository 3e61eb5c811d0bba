//! Main simulation driver.
//!
//! Runs an integrator over a whole duration, feeding every new snapshot to
//! the series recorder, then post-processes the recorded series.

use log::{debug, info};

use crate::body::Body;
use crate::error::SimulationError;
use crate::forces::ForceModel;
use crate::integrator::Integrator;
use crate::progress::{percent, ProgressObserver};
use crate::recorder::{RunParams, RunResult, SeriesRecorder};
use crate::state::Ensemble;
use crate::thermal::ThermalModel;

/// Everything a run needs besides its initial bodies
pub struct Engine<'a> {
    pub integrator: &'a dyn Integrator,
    pub force: &'a dyn ForceModel,
    pub thermal: &'a dyn ThermalModel,
}

/// Run a simulation from `t = 0` while `t < duration`, stepping by
/// `timestep`.
///
/// The initial bodies are copied into a working ensemble owned by the run;
/// the caller's slice is never modified. Samples are recorded after every
/// step and stamped with the time the step started at. Progress is reported
/// once per step, `(0, "Done!")` after the trajectory, then once per body
/// during post-processing.
///
/// # Errors
///
/// Invalid run parameters, two bodies at the same position, or any state
/// turning non-finite abort the run with no partial result.
pub fn run_simulation(
    initial: &[Body],
    params: RunParams,
    engine: &Engine<'_>,
    observer: &mut dyn ProgressObserver,
) -> Result<RunResult, SimulationError> {
    params.validate()?;

    info!(
        "Solving system of {} bodies: T = {} s, dT = {} s",
        initial.len(),
        params.duration,
        params.timestep
    );

    let mut ensemble = Ensemble::new(initial.to_vec());
    let mut recorder = SeriesRecorder::new(&ensemble);
    debug!("Allocated series for {} bodies", ensemble.body_count());

    let mut t = 0.0;
    while t < params.duration {
        let pct = percent(t, params.duration);
        observer.on_progress(pct, &format!("Calculating trajectories... ({pct} %)"));

        ensemble = engine
            .integrator
            .step(&ensemble, params.timestep, engine.force, engine.thermal)?;
        recorder.record(t, &ensemble);

        let next = t + params.timestep;
        if next <= t {
            return Err(SimulationError::Stalled { time: t });
        }
        t = next;
    }
    observer.on_progress(0, "Done!");
    debug!("Recorded {} samples", recorder.len());

    let result = recorder.finish(params, ensemble, observer);
    info!("Done! {} samples recorded", result.sample_count());
    Ok(result)
}
