//! Tab-separated export of recorded series, one directory per body.
//!
//! For every body `<name>` two files are written under `<dir>/<name>/`:
//!
//! - `<name><suffix> series.tsv` with columns time, temperature, speed,
//!   acceleration, x, y
//! - `<name><suffix> distances.tsv` with the time column followed by one
//!   column per other body
//!
//! Times are divided by the time unit factor and distances by the length
//! unit factor. Every other column stays SI.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;
use units::{LengthUnit, TimeUnit};

use crate::progress::{percent, ProgressObserver};
use crate::recorder::RunResult;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Naming and unit choices for an export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Appended to every file name after the body name
    pub suffix: String,
    pub time_unit: TimeUnit,
    pub length_unit: LengthUnit,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            suffix: String::new(),
            time_unit: TimeUnit::Seconds,
            length_unit: LengthUnit::Meters,
        }
    }
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, ExportError> {
    fs::write(&path, contents).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn series_table(result: &RunResult, i: usize, times: &[f64], options: &ExportOptions) -> String {
    let series = &result.bodies[i];
    let mut out = format!(
        "time [{}]\ttemperature [K]\tspeed [m/s]\tacceleration [m/s^2]\tx [m]\ty [m]\n",
        options.time_unit.symbol()
    );
    for (k, t) in times.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{t}\t{}\t{}\t{}\t{}\t{}",
            series.temperature[k], series.speed[k], series.acceleration[k], series.x[k], series.y[k]
        );
    }
    out
}

fn distance_table(result: &RunResult, i: usize, times: &[f64], options: &ExportOptions) -> String {
    let scale = options.length_unit.to_si();
    let others: Vec<usize> = (0..result.bodies.len()).filter(|&j| j != i).collect();

    let mut out = format!("time [{}]", options.time_unit.symbol());
    for &j in &others {
        let _ = write!(
            out,
            "\t{} [{}]",
            result.bodies[j].name,
            options.length_unit.symbol()
        );
    }
    out.push('\n');

    for (k, t) in times.iter().enumerate() {
        out.push_str(&t.to_string());
        for &j in &others {
            let _ = write!(out, "\t{}", result.distances[i][j][k] / scale);
        }
        out.push('\n');
    }
    out
}

/// Writes the series of every body in `result` below `dir`.
///
/// Reports `Saving data on <name> (<pct> %)` before each body and
/// `(0, "Done!")` at the end. Returns the written paths in body order.
pub fn export_series(
    result: &RunResult,
    dir: &Path,
    options: &ExportOptions,
    observer: &mut dyn ProgressObserver,
) -> Result<Vec<PathBuf>, ExportError> {
    info!("Saving series of {} bodies to {}", result.bodies.len(), dir.display());

    let time_scale = options.time_unit.to_si();
    let times: Vec<f64> = result.times.iter().map(|t| t / time_scale).collect();

    let n = result.bodies.len();
    let mut written = Vec::with_capacity(2 * n);
    for (i, series) in result.bodies.iter().enumerate() {
        let pct = percent((i + 1) as f64, n as f64);
        observer.on_progress(pct, &format!("Saving data on {} ({pct} %)", series.name));

        let body_dir = dir.join(&series.name);
        fs::create_dir_all(&body_dir).map_err(|source| ExportError::Io {
            path: body_dir.clone(),
            source,
        })?;

        let stem = format!("{}{}", series.name, options.suffix);
        written.push(write_file(
            body_dir.join(format!("{stem} series.tsv")),
            &series_table(result, i, &times, options),
        )?);
        written.push(write_file(
            body_dir.join(format!("{stem} distances.tsv")),
            &distance_table(result, i, &times, options),
        )?);
        debug!("Saved {}", series.name);
    }

    observer.on_progress(0, "Done!");
    Ok(written)
}
