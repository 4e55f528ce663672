//! Line-granular locations within an input description.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a named input: the input name and an optional 1-based line.
///
/// Placement inputs are line-oriented, so a line number is the finest
/// granularity any diagnostic needs.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Input name, usually the path it was read from.
    pub file: String,
    /// 1-based line number, when the problem is tied to a line.
    pub line: Option<u32>,
}

impl SourceLocation {
    /// Creates a location pointing at a specific line.
    pub fn line(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }

    /// Creates a location pointing at a whole input.
    pub fn file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.file),
            None => write!(f, "{}", self.file),
        }
    }
}
