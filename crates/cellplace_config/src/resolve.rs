//! Scaling raw annealing knobs to a concrete floorplan.

use crate::error::ConfigError;
use crate::types::AnnealConfig;
use cellplace_core::{AnnealParams, FloorplanStats};

/// Turns raw knobs into engine parameters for a floorplan.
///
/// - moves per epoch: `round(moves_per_temperature * cells^(4/3))`, at least 1
/// - initial temperature: `initial_temperature * initial_cost`
/// - freezing temperature: `freezing_temperature / (initial_cost / nets)`,
///   left unscaled when the average net cost is zero
///
/// `stats` must describe the floorplan before annealing starts.
pub fn resolve_schedule(
    config: &AnnealConfig,
    stats: &FloorplanStats,
) -> Result<AnnealParams, ConfigError> {
    let cells = f64::from(stats.cell_count);
    let moves = (config.moves_per_temperature * cells.powf(4.0 / 3.0))
        .round()
        .max(1.0);

    let initial_cost = stats.total_cost as f64;
    let average = if stats.net_count == 0 {
        0.0
    } else {
        initial_cost / f64::from(stats.net_count)
    };
    let freezing_temperature = if average > 0.0 {
        config.freezing_temperature / average
    } else {
        config.freezing_temperature
    };

    let params = AnnealParams {
        moves_per_epoch: moves as u64,
        initial_temperature: config.initial_temperature * initial_cost,
        cooling_rate: config.cooling_rate,
        freezing_temperature,
    };
    params.validate()?;
    Ok(params)
}
