//! Canonical body list and the runs made from it.

use log::info;

use crate::body::Body;
use crate::builder::{place, validate_body, OrbitalPlacement};
use crate::driver::{run_simulation, Engine};
use crate::error::{RecordError, SimulationError, ValidationError};
use crate::forces::DirectGravity;
use crate::integrator::{RotationPhase, SemiImplicitEuler};
use crate::progress::ProgressObserver;
use crate::record::{parse_records, write_records};
use crate::recorder::{RunParams, RunResult};
use crate::thermal::RadiativeEquilibrium;

/// Owns the canonical ensemble.
///
/// Edits go through validation and leave the body list unchanged when they
/// fail. Every [`System::solve`] call works on its own copy of the bodies,
/// so the canonical list is identical before and after a run.
#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>,
    integrator: SemiImplicitEuler,
    gravity: DirectGravity,
    thermal: RadiativeEquilibrium,
    last_run: Option<RunResult>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// A system whose runs use the given rotation-phase rule
    pub fn with_rotation(rotation: RotationPhase) -> Self {
        Self {
            integrator: SemiImplicitEuler::new(rotation),
            ..Self::default()
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn rotation(&self) -> RotationPhase {
        self.integrator.rotation
    }

    pub fn set_rotation(&mut self, rotation: RotationPhase) {
        self.integrator.rotation = rotation;
    }

    /// Appends a body given by its explicit state.
    pub fn add_body(&mut self, body: Body) -> Result<&Body, ValidationError> {
        validate_body(&self.bodies, &body)?;
        info!("Linked body {}", body.name);
        self.bodies.push(body);
        Ok(&self.bodies[self.bodies.len() - 1])
    }

    /// Synthesizes a body in orbit around existing bodies and appends it.
    pub fn add_orbiting(&mut self, placement: &OrbitalPlacement) -> Result<&Body, ValidationError> {
        let body = place(&self.bodies, placement)?;
        info!(
            "Created new body {}: pos({}, {}), vel({}, {})",
            body.name, body.position.x, body.position.y, body.velocity.x, body.velocity.y
        );
        self.bodies.push(body);
        Ok(&self.bodies[self.bodies.len() - 1])
    }

    /// Removes every body called `name`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.name != name);
        let removed = before - self.bodies.len();
        if removed > 0 {
            info!("Removed {removed} body(ies) named {name}");
        }
        removed
    }

    /// Replaces the canonical ensemble with `bodies`.
    ///
    /// All bodies are validated first; on error the current list is kept.
    pub fn load(&mut self, bodies: Vec<Body>) -> Result<(), ValidationError> {
        let mut accepted: Vec<Body> = Vec::with_capacity(bodies.len());
        for body in bodies {
            validate_body(&accepted, &body)?;
            accepted.push(body);
        }
        info!("Loaded {} bodies", accepted.len());
        self.bodies = accepted;
        Ok(())
    }

    /// Serializes the canonical ensemble to the record format
    pub fn to_records(&self) -> Result<String, RecordError> {
        write_records(&self.bodies)
    }

    /// Builds a system from the record format
    pub fn from_records(input: &str) -> Result<Self, RecordError> {
        let mut system = Self::new();
        system.load(parse_records(input)?)?;
        Ok(system)
    }

    /// Runs the canonical ensemble for `params.duration` seconds.
    ///
    /// On success the result replaces the previous one; on failure the
    /// previous result is kept.
    pub fn solve(
        &mut self,
        params: RunParams,
        observer: &mut dyn ProgressObserver,
    ) -> Result<&RunResult, SimulationError> {
        let engine = Engine {
            integrator: &self.integrator,
            force: &self.gravity,
            thermal: &self.thermal,
        };
        let result = run_simulation(&self.bodies, params, &engine, observer)?;
        Ok(self.last_run.insert(result))
    }

    /// Result of the most recent successful run
    pub fn last_run(&self) -> Option<&RunResult> {
        self.last_run.as_ref()
    }
}
