//! Configuration types deserialized from `cellplace.toml`.

use serde::{Deserialize, Serialize};

/// The top-level run configuration parsed from `cellplace.toml`.
///
/// Every section and field is optional; a missing file is the same as an
/// empty one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlacerConfig {
    /// Annealing schedule knobs.
    #[serde(default)]
    pub anneal: AnnealConfig,
    /// Progress reporting and pacing.
    #[serde(default)]
    pub view: ViewSettings,
}

/// Raw annealing knobs, before scaling to a particular floorplan.
///
/// See [`resolve_schedule`](crate::resolve_schedule) for how each one is
/// scaled.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnnealConfig {
    /// Starting temperature per unit of initial cost.
    pub initial_temperature: f64,
    /// Freezing temperature per unit of initial average net cost.
    pub freezing_temperature: f64,
    /// Temperature multiplier between epochs.
    pub cooling_rate: f64,
    /// Moves per epoch per `cells^(4/3)`.
    pub moves_per_temperature: f64,
    /// Random seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 200.0,
            freezing_temperature: 5e-6,
            cooling_rate: 0.95,
            moves_per_temperature: 10.0,
            seed: None,
        }
    }
}

/// How often the host hears about progress, and whether it paces the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Epochs between progress reports. `0` reports only the final result.
    pub refresh_rate: u32,
    /// Wait for a host command at every report.
    pub step: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            refresh_rate: 10,
            step: false,
        }
    }
}

impl ViewSettings {
    /// Returns `true` if epoch number `epoch` (1-based) should be reported.
    pub fn should_report(&self, epoch: u64) -> bool {
        self.refresh_rate != 0 && epoch % u64::from(self.refresh_rate) == 0
    }
}

/// Values given on the command line, each replacing its file counterpart
/// when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// `--init-temp`.
    pub initial_temperature: Option<f64>,
    /// `--freeze-temp`.
    pub freezing_temperature: Option<f64>,
    /// `--cool-rate`.
    pub cooling_rate: Option<f64>,
    /// `--moves-per-temp`.
    pub moves_per_temperature: Option<f64>,
    /// `--seed`.
    pub seed: Option<u64>,
    /// `--refresh`.
    pub refresh_rate: Option<u32>,
    /// `--step`. Only ever turns pacing on.
    pub step: bool,
}

impl PlacerConfig {
    /// Layers command-line values over the file values.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        let anneal = &mut self.anneal;
        if let Some(v) = overrides.initial_temperature {
            anneal.initial_temperature = v;
        }
        if let Some(v) = overrides.freezing_temperature {
            anneal.freezing_temperature = v;
        }
        if let Some(v) = overrides.cooling_rate {
            anneal.cooling_rate = v;
        }
        if let Some(v) = overrides.moves_per_temperature {
            anneal.moves_per_temperature = v;
        }
        if overrides.seed.is_some() {
            anneal.seed = overrides.seed;
        }
        if let Some(v) = overrides.refresh_rate {
            self.view.refresh_rate = v;
        }
        self.view.step |= overrides.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_schedule() {
        let config = PlacerConfig::default();
        assert_eq!(config.anneal.initial_temperature, 200.0);
        assert_eq!(config.anneal.freezing_temperature, 5e-6);
        assert_eq!(config.anneal.cooling_rate, 0.95);
        assert_eq!(config.anneal.moves_per_temperature, 10.0);
        assert_eq!(config.anneal.seed, None);
        assert_eq!(config.view.refresh_rate, 10);
        assert!(!config.view.step);
    }

    #[test]
    fn should_report_every_nth_epoch() {
        let view = ViewSettings {
            refresh_rate: 3,
            step: false,
        };
        let reported: Vec<u64> = (1..=10).filter(|&e| view.should_report(e)).collect();
        assert_eq!(reported, vec![3, 6, 9]);
    }

    #[test]
    fn zero_refresh_reports_nothing() {
        let view = ViewSettings {
            refresh_rate: 0,
            step: true,
        };
        assert!((1..100).all(|e| !view.should_report(e)));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = PlacerConfig::default();
        config.anneal.seed = Some(1);
        config.apply_overrides(&Overrides {
            cooling_rate: Some(0.8),
            refresh_rate: Some(1),
            step: true,
            ..Overrides::default()
        });
        assert_eq!(config.anneal.cooling_rate, 0.8);
        assert_eq!(config.anneal.initial_temperature, 200.0);
        assert_eq!(config.anneal.seed, Some(1));
        assert_eq!(config.view.refresh_rate, 1);
        assert!(config.view.step);
    }

    #[test]
    fn step_override_never_clears_file_value() {
        let mut config = PlacerConfig::default();
        config.view.step = true;
        config.apply_overrides(&Overrides::default());
        assert!(config.view.step);
    }
}
