//! Simulated annealing over entity swaps.
//!
//! Each epoch tries a fixed number of swaps between two random entities
//! (real cells or phantom empty sites), keeping improvements and accepting
//! degradations with the Metropolis probability `exp(gain / T)`. Temperature
//! falls geometrically between epochs until it reaches the freezing point,
//! then the best placement seen is restored.

use crate::error::ScheduleError;
use crate::floorplan::Floorplan;
use crate::ids::{EntityId, SiteId};
use crate::placement::observer::{AnnealObserver, EpochControl, EpochProgress};
use crate::random::Randomness;
use cellplace_diagnostics::DiagnosticSink;
use serde::Serialize;

/// The annealing schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnealParams {
    /// Trial moves per epoch.
    pub moves_per_epoch: u64,
    /// Temperature of the first epoch.
    pub initial_temperature: f64,
    /// Factor applied to the temperature after each epoch, in `(0, 1)`.
    pub cooling_rate: f64,
    /// Cooling stops once the temperature is at or below this.
    pub freezing_temperature: f64,
}

impl AnnealParams {
    /// Checks the preconditions the engine relies on.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.moves_per_epoch == 0 {
            return Err(ScheduleError::NoMoves);
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ScheduleError::CoolingRate(self.cooling_rate));
        }
        for (name, value) in [
            ("initial", self.initial_temperature),
            ("freezing", self.freezing_temperature),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScheduleError::Temperature { name, value });
            }
        }
        Ok(())
    }

    /// Number of epochs the schedule runs if nobody stops it.
    pub fn epoch_count(&self) -> u64 {
        let mut temperature = self.initial_temperature;
        let mut epochs = 0;
        while temperature > self.freezing_temperature {
            temperature *= self.cooling_rate;
            epochs += 1;
        }
        epochs
    }
}

/// Where the engine is in its run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnealState {
    /// Parameters accepted, nothing snapshotted yet.
    Initializing,
    /// Running epochs; `temperature` is the next epoch's temperature.
    Cooling {
        /// Next epoch's temperature.
        temperature: f64,
    },
    /// Best placement restored; the run is over.
    Frozen,
}

/// Totals for a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnealReport {
    /// Cost of the placement the run started from.
    pub initial_cost: u64,
    /// Cost of the restored best placement, recomputed from scratch.
    pub final_cost: u64,
    /// Epochs completed.
    pub epochs: u64,
    /// Trial moves made.
    pub moves: u64,
    /// Moves kept.
    pub accepted: u64,
    /// Cost-increasing moves kept.
    pub uphill_accepted: u64,
    /// Moves undone.
    pub rejected: u64,
    /// Temperature the engine would have used next.
    pub final_temperature: f64,
    /// Whether an observer stopped the run before it froze.
    pub stopped: bool,
}

impl AnnealReport {
    /// `final_cost / initial_cost`, or 1 when the start was already free.
    pub fn cost_ratio(&self) -> f64 {
        if self.initial_cost == 0 {
            1.0
        } else {
            self.final_cost as f64 / self.initial_cost as f64
        }
    }
}

#[derive(Debug, Default)]
struct Counters {
    accepted: u64,
    uphill_accepted: u64,
    rejected: u64,
}

/// Drives one annealing run over a floorplan it borrows exclusively.
pub struct Annealer<'a> {
    floorplan: &'a mut Floorplan,
    rng: &'a mut Randomness,
    params: AnnealParams,
    state: AnnealState,
    best_placement: Vec<SiteId>,
    best_cost: u64,
    initial_cost: u64,
    epochs: u64,
    moves: u64,
    totals: Counters,
    stopped: bool,
}

impl<'a> Annealer<'a> {
    /// Validates `params` and prepares a run. Nothing moves until
    /// [`start`](Self::start) or [`run`](Self::run).
    pub fn new(
        floorplan: &'a mut Floorplan,
        rng: &'a mut Randomness,
        params: AnnealParams,
    ) -> Result<Self, ScheduleError> {
        params.validate()?;
        let cost = floorplan.total_cost();
        Ok(Self {
            floorplan,
            rng,
            params,
            state: AnnealState::Initializing,
            best_placement: Vec::new(),
            best_cost: cost,
            initial_cost: cost,
            epochs: 0,
            moves: 0,
            totals: Counters::default(),
            stopped: false,
        })
    }

    /// Current state.
    pub fn state(&self) -> AnnealState {
        self.state
    }

    /// The schedule in use.
    pub fn params(&self) -> &AnnealParams {
        &self.params
    }

    /// Best cost seen so far.
    pub fn best_cost(&self) -> u64 {
        self.best_cost
    }

    /// Read-only view of the floorplan being annealed.
    pub fn floorplan(&self) -> &Floorplan {
        &*self.floorplan
    }

    /// Snapshots the current placement as the best so far and starts
    /// cooling at the initial temperature. Does nothing after the first call.
    pub fn start(&mut self) {
        if self.state != AnnealState::Initializing {
            return;
        }
        self.best_placement = self.floorplan.placement().to_vec();
        self.best_cost = self.floorplan.total_cost();
        self.initial_cost = self.best_cost;
        self.state = AnnealState::Cooling {
            temperature: self.params.initial_temperature,
        };
    }

    /// Runs one epoch and cools.
    ///
    /// Returns `None` without moving anything once the temperature has
    /// reached the freezing point, when the engine is frozen, or when the
    /// grid has fewer than two sites to swap.
    pub fn run_epoch(&mut self) -> Option<EpochProgress> {
        self.start();
        let AnnealState::Cooling { temperature } = self.state else {
            return None;
        };
        if temperature <= self.params.freezing_temperature {
            return None;
        }
        let max_entity = self.floorplan.site_count().checked_sub(1)?;

        let mut epoch = Counters::default();
        for _ in 0..self.params.moves_per_epoch {
            let (a, b) = self.rng.two_distinct_ints(0, max_entity)?;
            let (a, b) = (EntityId::from_raw(a), EntityId::from_raw(b));

            let cost_before = self.floorplan.total_cost();
            self.floorplan.swap(a, b);
            let cost_after = self.floorplan.total_cost();
            let gain = cost_before as i64 - cost_after as i64;
            self.moves += 1;

            if gain < 0 {
                let u = self.rng.uniform_float(0.0, 1.0);
                if u >= (gain as f64 / temperature).exp() {
                    self.floorplan.swap(a, b);
                    epoch.rejected += 1;
                } else {
                    epoch.accepted += 1;
                    epoch.uphill_accepted += 1;
                }
            } else {
                epoch.accepted += 1;
                if cost_after < self.best_cost {
                    self.best_placement.copy_from_slice(self.floorplan.placement());
                    self.best_cost = cost_after;
                }
            }
        }

        self.epochs += 1;
        self.totals.accepted += epoch.accepted;
        self.totals.uphill_accepted += epoch.uphill_accepted;
        self.totals.rejected += epoch.rejected;
        self.state = AnnealState::Cooling {
            temperature: temperature * self.params.cooling_rate,
        };

        Some(EpochProgress {
            epoch: self.epochs,
            temperature,
            total_cost: self.floorplan.total_cost(),
            best_cost: self.best_cost,
            accepted: epoch.accepted,
            uphill_accepted: epoch.uphill_accepted,
            rejected: epoch.rejected,
        })
    }

    /// Restores the best placement, recomputes every cost from scratch and
    /// ends the run.
    pub fn freeze(&mut self) -> AnnealReport {
        self.start();
        let final_temperature = match self.state {
            AnnealState::Cooling { temperature } => temperature,
            _ => self.params.freezing_temperature,
        };
        if self.state != AnnealState::Frozen {
            self.floorplan.restore_placement(&self.best_placement);
            self.floorplan.recompute_all();
            self.state = AnnealState::Frozen;
        }

        AnnealReport {
            initial_cost: self.initial_cost,
            final_cost: self.floorplan.total_cost(),
            epochs: self.epochs,
            moves: self.moves,
            accepted: self.totals.accepted,
            uphill_accepted: self.totals.uphill_accepted,
            rejected: self.totals.rejected,
            final_temperature,
            stopped: self.stopped,
        }
    }

    /// Runs the whole schedule, reporting to `observer` and forwarding
    /// geometry faults to `sink` at every epoch boundary.
    pub fn run(
        mut self,
        observer: &mut dyn AnnealObserver,
        sink: &DiagnosticSink,
    ) -> AnnealReport {
        self.start();
        observer.on_start(&self.params, &*self.floorplan);

        while let Some(progress) = self.run_epoch() {
            self.drain_faults(sink);
            if observer.on_epoch(&progress, &*self.floorplan) == EpochControl::Stop {
                self.stopped = true;
                break;
            }
        }

        let report = self.freeze();
        self.drain_faults(sink);
        observer.on_finished(&report, &*self.floorplan);
        report
    }

    fn drain_faults(&mut self, sink: &DiagnosticSink) {
        let input = self.floorplan.name().to_string();
        for fault in self.floorplan.take_faults() {
            sink.emit(fault.to_diagnostic(&input));
        }
    }
}
