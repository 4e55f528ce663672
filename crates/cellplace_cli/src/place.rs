//! The placement pipeline behind the `cellplace` binary.
//!
//! 1. Load `cellplace.toml` and layer command-line overrides on top
//! 2. Read and validate the placement description
//! 3. Build the floorplan with a seeded random placement
//! 4. Scale the schedule to the floorplan and anneal
//! 5. Render diagnostics and print the result

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use cellplace_config::{ConfigError, PlacerConfig};
use cellplace_core::{load_description, place, AnnealObserver, Floorplan, PlaceError, Randomness};
use cellplace_diagnostics::{
    Diagnostic, DiagnosticCode, DiagnosticRenderer, DiagnosticSink, Severity, SourceLocation,
    TerminalRenderer,
};

use crate::observer::ConsoleObserver;
use crate::report::PlacementReport;
use crate::{Cli, GlobalArgs, ReportFormat};

/// A failure that ends a run before a placement is produced.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The description or schedule was rejected by the engine.
    #[error(transparent)]
    Place(#[from] PlaceError),

    /// The configuration could not be turned into a schedule.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The floorplan dump could not be written.
    #[error("failed to write floorplan dump: {0}")]
    Dump(#[source] io::Error),
}

impl RunError {
    /// Converts this error into a diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Place(err) => err.to_diagnostic(),
            RunError::Config(err) => err.to_diagnostic(),
            RunError::Dump(_) => Diagnostic::error(DiagnosticCode::IO, self.to_string()),
        }
    }
}

/// Runs the placer as configured by `cli`.
///
/// Every failure, configuration included, is reported as a diagnostic in the
/// selected output format. Returns exit code 0 on success, 1 if any error
/// diagnostic was raised.
pub fn run(cli: &Cli, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let json = cli.format == ReportFormat::Json;
    let sink = DiagnosticSink::new();

    let report = match load_run_config(cli, global) {
        Ok((config, limit)) => {
            let verbose = !global.quiet && (global.verbose || !config.view.step);
            let stdin = io::stdin();
            let mut observer =
                ConsoleObserver::new(config.view.clone(), verbose, stdin.lock(), io::stderr())
                    .with_time_limit(limit);

            let mut stdout = io::stdout();
            let mut stderr = io::stderr();
            let dump: Option<&mut dyn Write> = match (cli.dump, json) {
                (false, _) => None,
                (true, false) => Some(&mut stdout),
                (true, true) => Some(&mut stderr),
            };

            match place_file(&cli.input, &config, dump, &mut observer, &sink) {
                Ok(mut report) => {
                    sink.emit(summary_note(&report));
                    report.diagnostics = sink.diagnostics();
                    Some(report)
                }
                Err(err) => {
                    sink.emit(err.to_diagnostic());
                    None
                }
            }
        }
        Err(err) => {
            sink.emit(err.to_diagnostic());
            None
        }
    };

    let diagnostics = sink.diagnostics();
    if json {
        let json = match &report {
            Some(report) => serde_json::to_string_pretty(report)?,
            None => serde_json::to_string_pretty(&diagnostics)?,
        };
        println!("{json}");
    } else {
        let renderer = TerminalRenderer::new(global.color);
        for diag in &diagnostics {
            if diag.severity.is_error() || !global.quiet {
                eprintln!("{}", renderer.render(diag));
            }
        }
        if let Some(report) = &report {
            print!("{}", report.summary());
        }
        if !global.quiet {
            let warning_count = diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Warning)
                .count();
            eprintln!(
                "   Result: {} error(s), {} warning(s)",
                sink.error_count(),
                warning_count
            );
        }
    }

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Loads, parses, builds and anneals one description file.
///
/// With `dump`, the floorplan is written there before and after annealing.
pub fn place_file(
    input: &Path,
    config: &PlacerConfig,
    mut dump: Option<&mut dyn Write>,
    observer: &mut dyn AnnealObserver,
    sink: &DiagnosticSink,
) -> Result<PlacementReport, RunError> {
    let description = load_description(input).map_err(PlaceError::from)?;

    let seed = config.anneal.seed.unwrap_or_else(rand::random);
    let mut rng = Randomness::seeded(seed);
    let mut floorplan = Floorplan::build(&description, &mut rng).map_err(PlaceError::from)?;
    write_dump(&mut dump, &floorplan)?;

    let schedule = cellplace_config::resolve_schedule(&config.anneal, &floorplan.stats())?;
    let anneal = place(&mut floorplan, &schedule, &mut rng, observer, sink)?;
    write_dump(&mut dump, &floorplan)?;

    Ok(PlacementReport::new(&floorplan, seed, schedule, anneal))
}

/// Resolves the configuration: `--config` file or directory if given,
/// otherwise `cellplace.toml` in the current directory if present, then the
/// command-line overrides. Also checks `--time-limit`.
fn load_run_config(
    cli: &Cli,
    global: &GlobalArgs,
) -> Result<(PlacerConfig, Option<Duration>), ConfigError> {
    let mut config = match &global.config {
        Some(path) if path.is_dir() => cellplace_config::load_config(path)?,
        Some(path) => cellplace_config::load_config_file(path)?,
        None => cellplace_config::load_config_or_default(&std::env::current_dir()?)?,
    };
    config.apply_overrides(&cli.overrides());
    cellplace_config::validate_config(&config)?;
    let limit = time_limit(cli.time_limit)?;
    Ok((config, limit))
}

fn time_limit(seconds: Option<f64>) -> Result<Option<Duration>, ConfigError> {
    seconds
        .map(|s| {
            Duration::try_from_secs_f64(s).map_err(|_| {
                ConfigError::ValidationError(format!(
                    "time limit must be a non-negative number of seconds, got {s}"
                ))
            })
        })
        .transpose()
}

fn write_dump(
    dump: &mut Option<&mut dyn Write>,
    floorplan: &Floorplan,
) -> Result<(), RunError> {
    if let Some(out) = dump {
        write!(out, "{floorplan}").map_err(RunError::Dump)?;
    }
    Ok(())
}

fn summary_note(report: &PlacementReport) -> Diagnostic {
    Diagnostic::note(
        DiagnosticCode::SUMMARY,
        format!(
            "final cost {} is {:.2}% of the initial cost {}",
            report.anneal.final_cost,
            report.cost_ratio * 100.0,
            report.anneal.initial_cost
        ),
    )
    .at(SourceLocation::file(report.input.clone()))
}
