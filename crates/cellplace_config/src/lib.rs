//! Parsing and validation of `cellplace.toml` run configuration files.
//!
//! This crate reads the optional configuration file into a strongly-typed
//! [`PlacerConfig`], layers command-line overrides on top, and scales the
//! raw annealing knobs into engine [`AnnealParams`](cellplace_core::AnnealParams)
//! for a concrete floorplan. It also defines the [`ViewCommand`]s a host
//! uses to steer a paced run.

#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use command::ViewCommand;
pub use error::ConfigError;
pub use loader::{
    load_config, load_config_file, load_config_from_str, load_config_or_default,
    validate_config, CONFIG_FILE_NAME,
};
pub use resolve::resolve_schedule;
pub use types::*;
