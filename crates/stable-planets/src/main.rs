use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use nbody::export::{export_series, ExportOptions};
use nbody::progress::ProgressObserver;
use nbody::{RotationPhase, RunParams, System};
use units::{LengthUnit, Time, TimeUnit};

mod scenario;


use scenario::ScenarioConfig;

/// Gravitational and radiative evolution of small planetary systems
#[derive(Parser, Debug)]
#[command(name = "stable-planets", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a system and export the recorded series
    Run(RunArgs),
    /// Build the system of a scenario and save it as a record file
    Convert {
        #[arg(long)]
        scenario: PathBuf,
        #[arg(long)]
        save: PathBuf,
    },
}

#[derive(Args, Debug)]
struct Source {
    /// YAML scenario
    #[arg(long, conflicts_with = "system", required_unless_present = "system")]
    scenario: Option<PathBuf>,
    /// Saved record file (.sys)
    #[arg(long)]
    system: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    source: Source,

    /// Total simulated time, overrides the scenario
    #[arg(long)]
    duration: Option<f64>,
    /// Unit of --duration: name or selector index
    #[arg(long, value_parser = parse_time_unit, default_value = "s")]
    duration_unit: TimeUnit,
    /// Step size, overrides the scenario
    #[arg(long)]
    timestep: Option<f64>,
    /// Unit of --timestep: name or selector index
    #[arg(long, value_parser = parse_time_unit, default_value = "s")]
    timestep_unit: TimeUnit,

    #[arg(long, value_enum)]
    rotation: Option<RotationArg>,

    /// Directory for the exported series
    #[arg(long, default_value = "Data")]
    out: PathBuf,
    /// Appended to every exported file name
    #[arg(long, default_value = "")]
    suffix: String,
    /// Time unit of the exported series
    #[arg(long, value_parser = parse_time_unit, default_value = "s")]
    time_unit: TimeUnit,
    /// Length unit of the exported distances
    #[arg(long, value_parser = parse_length_unit, default_value = "m")]
    distance_unit: LengthUnit,

    /// Also save the system as a record file
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RotationArg {
    Recomputed,
    Accumulated,
}

impl From<RotationArg> for RotationPhase {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::Recomputed => RotationPhase::Recomputed,
            RotationArg::Accumulated => RotationPhase::Accumulated,
        }
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, String> {
    match s.parse::<i32>() {
        Ok(index) => TimeUnit::from_index(index),
        Err(_) => s.parse(),
    }
    .map_err(|e| e.to_string())
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, String> {
    match s.parse::<i32>() {
        Ok(index) => LengthUnit::from_index(index),
        Err(_) => s.parse(),
    }
    .map_err(|e| e.to_string())
}

/// Logs each new percentage once
#[derive(Default)]
struct ConsoleProgress {
    last: Option<(u8, String)>,
}

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&mut self, percent: u8, message: &str) {
        let stage = message.split(" (").next().unwrap_or(message).to_string();
        let current = (percent, stage);
        if self.last.as_ref() != Some(&current) {
            info!("{message}");
            self.last = Some(current);
        }
    }
}

fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let scenario = ScenarioConfig::from_yaml(&text)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(scenario)
}

fn load_system(path: &Path) -> Result<System> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read system {}", path.display()))?;
    let system = System::from_records(&text)
        .with_context(|| format!("failed to load system {}", path.display()))?;
    Ok(system)
}

fn save_system(system: &System, path: &Path) -> Result<()> {
    let text = system.to_records()?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Saved {} bodies to {}", system.len(), path.display());
    Ok(())
}

fn run(args: RunArgs) -> Result<()> {
    let (mut system, scenario_params) = match (&args.source.scenario, &args.source.system) {
        (Some(path), _) => {
            let scenario = load_scenario(path)?;
            (scenario.build_system()?, Some(scenario.run.params()))
        }
        (None, Some(path)) => (load_system(path)?, None),
        (None, None) => bail!("either --scenario or --system is required"),
    };

    if let Some(rotation) = args.rotation {
        system.set_rotation(rotation.into());
    }

    let duration = args
        .duration
        .map(|d| Time::new(d, args.duration_unit).to_seconds())
        .or(scenario_params.map(|p| p.duration))
        .context("--duration is required when running a saved system")?;
    let timestep = args
        .timestep
        .map(|d| Time::new(d, args.timestep_unit).to_seconds())
        .or(scenario_params.map(|p| p.timestep))
        .context("--timestep is required when running a saved system")?;

    if let Some(path) = &args.save {
        save_system(&system, path)?;
    }

    let mut progress = ConsoleProgress::default();
    let result = system.solve(RunParams::new(duration, timestep), &mut progress)?;

    let options = ExportOptions {
        suffix: args.suffix,
        time_unit: args.time_unit,
        length_unit: args.distance_unit,
    };
    let written = export_series(result, &args.out, &options, &mut progress)?;
    info!("Wrote {} files under {}", written.len(), args.out.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Run(args) => run(args),
        Command::Convert { scenario, save } => {
            let system = load_scenario(&scenario)?.build_system()?;
            save_system(&system, &save)
        }
    }
}
