//! Placement engine.
//!
//! Starts from the random permutation [`Floorplan::build`] produced and
//! refines it with simulated annealing to minimize total half-perimeter
//! wirelength.

mod anneal;
mod cost;
mod observer;
mod random;

use crate::error::PlaceError;
use crate::floorplan::Floorplan;
use crate::random::Randomness;
use cellplace_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, SourceLocation};

pub use anneal::{AnnealParams, AnnealReport, AnnealState, Annealer};
pub use cost::scratch_cost;
pub use observer::{AnnealObserver, EpochControl, EpochProgress, NullObserver};
pub(crate) use random::random_permutation;

/// Anneals `floorplan` under `params`, leaving the best placement found in it.
///
/// A grid with fewer than two sites has no move to make; it is reported as a
/// `W302` warning and returned unchanged.
pub fn place(
    floorplan: &mut Floorplan,
    params: &AnnealParams,
    rng: &mut Randomness,
    observer: &mut dyn AnnealObserver,
    sink: &DiagnosticSink,
) -> Result<AnnealReport, PlaceError> {
    params.validate()?;

    let sites = floorplan.site_count();
    if sites < 2 {
        sink.emit(
            Diagnostic::warning(
                DiagnosticCode::DEGENERATE_GRID,
                format!("grid has {sites} site(s), no swap is possible"),
            )
            .at(SourceLocation::file(floorplan.name()))
            .with_note("annealing skipped, the initial placement is final"),
        );
    }

    let annealer = Annealer::new(floorplan, rng, params.clone())?;
    Ok(annealer.run(observer, sink))
}
