//! cellplace: the command-line front end of the annealing placer.
//!
//! Reads a placement description, anneals it, and prints a summary or a JSON
//! report. Progress goes to stderr; with `--step` the run pauses at every
//! progress report and waits for a command on stdin.

#![warn(missing_docs)]

mod observer;
mod place;
mod report;

use std::path::PathBuf;
use std::process;

use cellplace_config::Overrides;
use clap::{Parser, ValueEnum};

/// cellplace: standard-cell placement by simulated annealing.
#[derive(Parser, Debug)]
#[command(name = "cellplace", version, about = "Simulated-annealing cell placer")]
pub struct Cli {
    /// Placement description to read.
    pub input: PathBuf,

    /// Suppress all output except errors and the final result.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the schedule banner and progress even when pacing with `--step`.
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `cellplace.toml` file or a directory containing one.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed; the same seed reproduces the same run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial temperature, per unit of initial cost.
    #[arg(short = 'i', long = "init-temp")]
    pub init_temp: Option<f64>,

    /// Freezing temperature, per unit of average net cost.
    #[arg(short = 'f', long = "freeze-temp")]
    pub freeze_temp: Option<f64>,

    /// Temperature multiplier between epochs.
    #[arg(short = 'c', long = "cool-rate")]
    pub cool_rate: Option<f64>,

    /// Moves per epoch, per cells^(4/3).
    #[arg(short = 'm', long = "moves-per-temp")]
    pub moves_per_temp: Option<f64>,

    /// Epochs between progress reports (0 reports only the result).
    #[arg(short = 'r', long)]
    pub refresh: Option<u32>,

    /// Pause at every progress report and read a command from stdin.
    #[arg(long)]
    pub step: bool,

    /// Stop annealing after this many seconds and keep the best placement.
    #[arg(long, value_name = "SECONDS")]
    pub time_limit: Option<f64>,

    /// Print the floorplan before and after annealing.
    #[arg(long)]
    pub dump: bool,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl Cli {
    /// Command-line values that replace configuration file values.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            initial_temperature: self.init_temp,
            freezing_temperature: self.freeze_temp,
            cooling_rate: self.cool_rate,
            moves_per_temperature: self.moves_per_temp,
            seed: self.seed,
            refresh_rate: self.refresh,
            step: self.step,
        }
    }
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Result output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary.
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print the banner and progress.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file or directory.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => stderr_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config.clone(),
    };

    match place::run(&cli, &global) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn stderr_is_terminal() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
