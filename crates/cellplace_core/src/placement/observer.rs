//! The interface between the annealer and whatever is watching it.
//!
//! A console logger, a renderer or a human pacing the run all plug in here.
//! Observers only see the floorplan read-only, and their sole influence on
//! the run is the [`EpochControl`] they return at epoch boundaries.

use crate::floorplan::Floorplan;
use crate::placement::anneal::{AnnealParams, AnnealReport};
use serde::Serialize;

/// What happened during one epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochProgress {
    /// 1-based epoch number.
    pub epoch: u64,
    /// Temperature the epoch ran at.
    pub temperature: f64,
    /// Cost at the end of the epoch.
    pub total_cost: u64,
    /// Best cost seen so far.
    pub best_cost: u64,
    /// Moves kept, including uphill ones.
    pub accepted: u64,
    /// Cost-increasing moves kept by the Metropolis rule.
    pub uphill_accepted: u64,
    /// Moves undone.
    pub rejected: u64,
}

/// An observer's answer at an epoch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochControl {
    /// Keep cooling.
    Continue,
    /// Freeze now with the best placement found so far.
    Stop,
}

/// Receives progress from the annealer.
///
/// Every method has a no-op default. `on_epoch` may block (for instance to
/// wait for a human); the schedule resumes exactly where it paused.
pub trait AnnealObserver {
    /// Called once before the first epoch.
    fn on_start(&mut self, _params: &AnnealParams, _floorplan: &Floorplan) {}

    /// Called after every epoch, before cooling takes effect.
    fn on_epoch(&mut self, _progress: &EpochProgress, _floorplan: &Floorplan) -> EpochControl {
        EpochControl::Continue
    }

    /// Called once after the best placement has been restored.
    fn on_finished(&mut self, _report: &AnnealReport, _floorplan: &Floorplan) {}
}

/// An observer that ignores everything, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl AnnealObserver for NullObserver {}
