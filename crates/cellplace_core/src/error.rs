//! Error types for loading descriptions and configuring the annealer.

use cellplace_diagnostics::{Diagnostic, DiagnosticCode, SourceLocation};

/// A malformed or inconsistent input description.
///
/// Fatal: no floorplan exists when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input could not be read.
    #[error("failed to read {file}: {source}")]
    Io {
        /// Input name.
        file: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input holds no header line.
    #[error("{file}: missing header line 'cells nets rows columns'")]
    Empty {
        /// Input name.
        file: String,
    },

    /// A token is not an unsigned integer.
    #[error("{file}:{line}: value '{token}' is not a non-negative integer")]
    InvalidToken {
        /// Input name.
        file: String,
        /// 1-based line number.
        line: u32,
        /// The offending token.
        token: String,
    },

    /// The header line does not hold exactly four integers.
    #[error("{file}:{line}: header should include four integers, found {found}")]
    BadHeader {
        /// Input name.
        file: String,
        /// 1-based line number.
        line: u32,
        /// Number of integers on the line.
        found: usize,
    },

    /// More cells than grid sites, or a grid too large to index.
    #[error("{file}:{line}: {sites} cell sites can't fit {cells} cells")]
    Capacity {
        /// Input name.
        file: String,
        /// 1-based line number.
        line: u32,
        /// `rows * cols`.
        sites: u64,
        /// Declared cell count.
        cells: u32,
    },

    /// A net line's declared cell count disagrees with the ids it lists.
    #[error("{file}:{line}: net declares {declared} cells but lists {found}")]
    CountMismatch {
        /// Input name.
        file: String,
        /// 1-based line number.
        line: u32,
        /// The leading count on the line.
        declared: u32,
        /// The number of ids that follow it.
        found: usize,
    },

    /// A net connecting no cells.
    #[error("{file}:{line}: net must connect at least one cell")]
    EmptyNet {
        /// Input name.
        file: String,
        /// 1-based line number.
        line: u32,
    },

    /// A net references a cell id outside `[0, cells)`.
    #[error("{file}:{line}: cell id {cell} is out of range, only {cells} cells declared")]
    CellOutOfRange {
        /// Input name.
        file: String,
        /// 1-based line number.
        line: u32,
        /// The offending id.
        cell: u32,
        /// Declared cell count.
        cells: u32,
    },

    /// A non-blank line after the last declared net.
    #[error("{file}:{line}: extra line after the last net")]
    ExtraLine {
        /// Input name.
        file: String,
        /// 1-based line number.
        line: u32,
    },

    /// The input ended before every declared net was read.
    #[error("{file}: header declares {expected} nets, found {found}")]
    MissingNets {
        /// Input name.
        file: String,
        /// Declared net count.
        expected: u32,
        /// Net lines present.
        found: u32,
    },
}

impl ParseError {
    /// Returns the name of the input the error was found in.
    pub fn file(&self) -> &str {
        match self {
            ParseError::Io { file, .. }
            | ParseError::Empty { file }
            | ParseError::InvalidToken { file, .. }
            | ParseError::BadHeader { file, .. }
            | ParseError::Capacity { file, .. }
            | ParseError::CountMismatch { file, .. }
            | ParseError::EmptyNet { file, .. }
            | ParseError::CellOutOfRange { file, .. }
            | ParseError::ExtraLine { file, .. }
            | ParseError::MissingNets { file, .. } => file,
        }
    }

    /// Returns the 1-based line the error was found on, if it is tied to one.
    pub fn line(&self) -> Option<u32> {
        match self {
            ParseError::InvalidToken { line, .. }
            | ParseError::BadHeader { line, .. }
            | ParseError::Capacity { line, .. }
            | ParseError::CountMismatch { line, .. }
            | ParseError::EmptyNet { line, .. }
            | ParseError::CellOutOfRange { line, .. }
            | ParseError::ExtraLine { line, .. } => Some(*line),
            ParseError::Io { .. } | ParseError::Empty { .. } | ParseError::MissingNets { .. } => {
                None
            }
        }
    }

    /// Converts this error into an `E101` (or `E102` for I/O) diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            ParseError::Io { .. } => DiagnosticCode::IO,
            _ => DiagnosticCode::PARSE,
        };
        let location = match self.line() {
            Some(line) => SourceLocation::line(self.file(), line),
            None => SourceLocation::file(self.file()),
        };
        let diag = Diagnostic::error(code, self.to_string()).at(location);
        match self {
            ParseError::BadHeader { .. } | ParseError::Empty { .. } => {
                diag.with_help("the first line is '<cells> <nets> <rows> <columns>'")
            }
            ParseError::CountMismatch { .. } | ParseError::EmptyNet { .. } => {
                diag.with_help("net lines are '<k> <cell_1> ... <cell_k>'")
            }
            _ => diag,
        }
    }
}

/// Annealing parameters that violate the engine's preconditions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// An epoch must try at least one move.
    #[error("moves per epoch must be positive")]
    NoMoves,

    /// The cooling rate must lie strictly between 0 and 1.
    #[error("cooling rate {0} is outside (0, 1)")]
    CoolingRate(f64),

    /// A temperature is negative, infinite or NaN.
    #[error("{name} temperature {value} must be finite and non-negative")]
    Temperature {
        /// Which temperature.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ScheduleError {
    /// Converts this error into an `E201` diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(DiagnosticCode::CONFIG, self.to_string())
    }
}

/// Any failure of the load-and-place pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// The description could not be loaded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The annealing parameters are invalid.
    #[error("invalid annealing schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl PlaceError {
    /// Converts this error into a diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PlaceError::Parse(err) => err.to_diagnostic(),
            PlaceError::Schedule(err) => err.to_diagnostic(),
        }
    }
}
