//! Error types for configuration loading and validation.

use cellplace_core::ScheduleError;
use cellplace_diagnostics::{Diagnostic, DiagnosticCode};

/// Errors that can occur when loading, validating or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// The scaled schedule violates the engine's preconditions.
    #[error("invalid annealing schedule: {0}")]
    Schedule(#[from] ScheduleError),

    /// A host command could not be understood.
    #[error("unknown command '{0}', expected p, a refresh count, all or q")]
    UnknownCommand(String),
}

impl ConfigError {
    /// Converts this error into an `E201` diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(DiagnosticCode::CONFIG, self.to_string());
        match self {
            ConfigError::ParseError(_) | ConfigError::ValidationError(_) => {
                diag.with_help("see the [anneal] and [view] sections of cellplace.toml")
            }
            _ => diag,
        }
    }
}
