//! The run report: what was placed, how the annealing went, where every cell
//! ended up.

use std::fmt::Write as _;

use cellplace_core::{AnnealParams, AnnealReport, CellId, Floorplan};
use cellplace_diagnostics::Diagnostic;
use serde::Serialize;

/// Final location of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellLocation {
    /// Cell id.
    pub cell: u32,
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

/// Everything a finished run produced, as printed by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementReport {
    /// Input the floorplan was read from.
    pub input: String,
    /// Grid columns.
    pub columns: u32,
    /// Grid rows.
    pub rows: u32,
    /// Real cells.
    pub cells: u32,
    /// Nets.
    pub nets: u32,
    /// Seed that reproduces this run.
    pub seed: u64,
    /// The scaled schedule.
    pub schedule: AnnealParams,
    /// Engine totals.
    pub anneal: AnnealReport,
    /// `final_cost / initial_cost`.
    pub cost_ratio: f64,
    /// Final cell locations, by cell id.
    pub locations: Vec<CellLocation>,
    /// Warnings and notes raised during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl PlacementReport {
    /// Collects the report for a floorplan that has finished annealing.
    pub fn new(
        floorplan: &Floorplan,
        seed: u64,
        schedule: AnnealParams,
        anneal: AnnealReport,
    ) -> Self {
        // Out-of-grid cells were already reported as geometry warnings.
        let locations = (0..floorplan.cell_count())
            .filter_map(|raw| {
                let p = floorplan.location_of(CellId::from_raw(raw)).ok()?;
                Some(CellLocation {
                    cell: raw,
                    x: p.x,
                    y: p.y,
                })
            })
            .collect();

        Self {
            input: floorplan.name().to_string(),
            columns: floorplan.nx(),
            rows: floorplan.ny(),
            cells: floorplan.cell_count(),
            nets: floorplan.net_count(),
            seed,
            cost_ratio: anneal.cost_ratio(),
            schedule,
            anneal,
            locations,
            diagnostics: Vec::new(),
        }
    }

    /// Human-readable summary for text output.
    pub fn summary(&self) -> String {
        let a = &self.anneal;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "   Placed {}: {} cells, {} nets on a {}x{} grid (seed {})",
            self.input, self.cells, self.nets, self.columns, self.rows, self.seed
        );
        let _ = writeln!(
            out,
            "   Cost: {} -> {} (ratio {:.4})",
            a.initial_cost, a.final_cost, self.cost_ratio
        );
        let _ = writeln!(
            out,
            "   Epochs: {}, moves: {} ({} accepted, {} uphill, {} rejected)",
            a.epochs, a.moves, a.accepted, a.uphill_accepted, a.rejected
        );
        if a.stopped {
            let _ = writeln!(out, "   Stopped before freezing; kept the best placement found");
        }
        out
    }
}
