//! Standard-cell placement by simulated annealing.
//!
//! A placement problem is a set of cells, a set of nets connecting them and
//! a rectangular grid of sites. This crate reads the textual description of
//! such a problem, builds a [`Floorplan`] with a random initial placement and
//! anneals it to minimize total half-perimeter wirelength.
//!
//! # Pipeline
//!
//! 1. **Parse**: [`load_description`] / [`parse_description`]
//! 2. **Build**: [`Floorplan::build`] wires up the cell-to-net index and
//!    draws a random permutation of entities over sites
//! 3. **Place**: [`place`] runs the annealing schedule, reporting to an
//!    [`AnnealObserver`], and leaves the best placement in the floorplan
//!
//! # Usage
//!
//! ```ignore
//! use cellplace_core::{load_description, place, Floorplan, NullObserver, Randomness};
//!
//! let description = load_description(path)?;
//! let mut rng = Randomness::seeded(7);
//! let mut floorplan = Floorplan::build(&description, &mut rng)?;
//! let report = place(&mut floorplan, &params, &mut rng, &mut NullObserver, &sink)?;
//! assert!(report.final_cost <= report.initial_cost);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod floorplan;
pub mod geometry;
pub mod ids;
pub mod parse;
pub mod placement;
pub mod random;

pub use error::{ParseError, PlaceError, ScheduleError};
pub use floorplan::{Cell, Floorplan, FloorplanStats, Net};
pub use geometry::{GeometryError, Point};
pub use ids::{CellId, EntityId, NetId, SiteId};
pub use parse::{load_description, parse_description, Description, NetSpec};
pub use placement::{
    place, scratch_cost, AnnealObserver, AnnealParams, AnnealReport, AnnealState, Annealer,
    EpochControl, EpochProgress, NullObserver,
};
pub use random::Randomness;
