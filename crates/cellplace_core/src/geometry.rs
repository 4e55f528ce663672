//! Grid coordinate math and the half-perimeter wirelength estimator.
//!
//! Grid locations are row-major: site `y * nx + x` holds column `x` of row
//! `y`. Nothing here knows about cells or nets, and nothing here knows that
//! the floorplan doubles row coordinates for routing channels.

use crate::ids::SiteId;
use cellplace_diagnostics::{Diagnostic, DiagnosticCode, SourceLocation};
use serde::{Deserialize, Serialize};

/// An `(x, y)` grid coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An index outside the declared grid.
///
/// Always a symptom of inconsistent data that should have been rejected when
/// the input was parsed, so callers report it and carry on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A 2-D coordinate outside an `nx` by `ny` grid.
    #[error("coordinate ({x}, {y}) is outside the {nx}x{ny} grid")]
    CoordinateOutOfRange {
        /// Column.
        x: u32,
        /// Row.
        y: u32,
        /// Grid columns.
        nx: u32,
        /// Grid rows.
        ny: u32,
    },
    /// A linear index outside an `nx` by `ny` grid.
    #[error("site {index} is outside the {nx}x{ny} grid")]
    IndexOutOfRange {
        /// The offending linear index.
        index: u32,
        /// Grid columns.
        nx: u32,
        /// Grid rows.
        ny: u32,
    },
}

impl GeometryError {
    /// Converts this error into a `W301` warning for the given input.
    pub fn to_diagnostic(&self, input: &str) -> Diagnostic {
        Diagnostic::warning(DiagnosticCode::GEOMETRY, self.to_string())
            .at(SourceLocation::file(input))
            .with_note("the point was left out of its net's bounding box")
    }
}

/// Converts a column/row pair into a row-major linear site.
///
/// A coordinate whose linear index does not fit a [`SiteId`] is out of range
/// as well.
pub fn to_linear(x: u32, y: u32, nx: u32, ny: u32) -> Result<SiteId, GeometryError> {
    let out_of_range = GeometryError::CoordinateOutOfRange { x, y, nx, ny };
    if x >= nx || y >= ny {
        return Err(out_of_range);
    }
    let index = u64::from(y) * u64::from(nx) + u64::from(x);
    u32::try_from(index)
        .map(SiteId::from_raw)
        .map_err(|_| out_of_range)
}

/// Converts a row-major linear site back into a column/row pair.
pub fn to_coordinate(site: SiteId, nx: u32, ny: u32) -> Result<Point, GeometryError> {
    let index = site.as_raw();
    if u64::from(index) >= u64::from(nx) * u64::from(ny) {
        return Err(GeometryError::IndexOutOfRange { index, nx, ny });
    }
    Ok(Point::new(index % nx, index / nx))
}

/// Returns `(max x - min x) + (max y - min y)` over `points`.
///
/// This is the half perimeter of the points' bounding box, the usual cheap
/// estimate of a net's routed length. An empty set has zero extent.
pub fn half_perimeter(points: &[Point]) -> u32 {
    let Some(first) = points.first() else {
        return 0;
    };

    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    (max_x - min_x) + (max_y - min_y)
}
