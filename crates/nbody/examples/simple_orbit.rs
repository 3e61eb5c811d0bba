//! Earth around the Sun for one year
//!
//! Places the Earth on a circular orbit with the orbital builder, runs the
//! semi-implicit Euler integrator at a one-hour step and prints energy,
//! distance and temperature diagnostics.
//!
//! Run with: cargo run --package nbody --example simple_orbit

use nbody::forces::{DirectGravity, ForceModel};
use nbody::progress::Silent;
use nbody::{Body, Ensemble, OrbitalPlacement, RunParams, System};
use nalgebra::Vector2;
use units::constants::{AU, EARTH_MASS, EARTH_RADIUS, EARTH_YEAR, SOLAR_MASS, SUN_RADIUS, SUN_TEMPERATURE};
use units::Length;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sun and Earth, one year\n");
    println!("{}", "=".repeat(60));

    let mut system = System::new();
    system.add_body(Body::at_rest("Sun", SOLAR_MASS, SUN_RADIUS, Vector2::zeros()).heat_source(SUN_TEMPERATURE))?;
    let earth = system.add_orbiting(&OrbitalPlacement::new("Earth", EARTH_MASS, EARTH_RADIUS).orbiting(["Sun"], AU))?;
    println!("Earth starts at {:.3e} m moving at {:.1} m/s", earth.position.x, earth.speed());

    let gravity = DirectGravity::new();
    let initial = Ensemble::new(system.bodies().to_vec());
    let e0 = initial.kinetic_energy() + gravity.potential_energy(&initial);
    let l0 = initial.total_angular_momentum();

    let result = system.solve(RunParams::new(EARTH_YEAR, 3600.0), &mut Silent)?;
    let last = &result.final_state;
    let e1 = last.kinetic_energy() + gravity.potential_energy(last);
    let l1 = last.total_angular_momentum();

    println!("\nSamples recorded: {}", result.sample_count());
    if let Some(distances) = result.distance_between("Earth", "Sun") {
        let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = distances.iter().cloned().fold(0.0, f64::max);
        println!(
            "  Distance range: {:.5} - {:.5} AU",
            Length::from_meters(min).to_au(),
            Length::from_meters(max).to_au()
        );
    }
    if let Some(series) = result.body("Earth") {
        if let Some(t) = series.temperature.last() {
            println!("  Final temperature: {t:.2} K");
        }
    }

    println!("\nConservation:");
    println!("  Energy drift: {:.3e}", ((e1 - e0) / e0).abs());
    println!("  Angular momentum drift: {:.3e}", ((l1 - l0) / l0).abs());
    Ok(())
}
