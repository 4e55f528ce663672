//! Diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Error diagnostics, prefixed with `E`.
    Error,
    /// Warning diagnostics, prefixed with `W`.
    Warning,
    /// Informational notes, prefixed with `N`.
    Note,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Note => 'N',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a number.
///
/// Displayed as the category prefix followed by a zero-padded 3-digit number,
/// e.g., `E101`, `W301`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Malformed or inconsistent input description.
    pub const PARSE: DiagnosticCode = DiagnosticCode::new(Category::Error, 101);
    /// The input description could not be read.
    pub const IO: DiagnosticCode = DiagnosticCode::new(Category::Error, 102);
    /// Invalid configuration or annealing parameters.
    pub const CONFIG: DiagnosticCode = DiagnosticCode::new(Category::Error, 201);
    /// A grid index fell outside the declared grid.
    pub const GEOMETRY: DiagnosticCode = DiagnosticCode::new(Category::Warning, 301);
    /// The grid is too small for any move; annealing was skipped.
    pub const DEGENERATE_GRID: DiagnosticCode = DiagnosticCode::new(Category::Warning, 302);
    /// Summary of a finished run.
    pub const SUMMARY: DiagnosticCode = DiagnosticCode::new(Category::Note, 401);

    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
