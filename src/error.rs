//! Error types for the simulator.
//!
//! `SimulationError` is returned by the core for every rejected operation. None of
//! them leave the building in a modified state.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("invalid floor {floor}, the building has floors 1..={n_floors}")]
    InvalidFloor { floor: u8, n_floors: u8 },

    #[error("origin and destination are both floor {0}")]
    SameFloor(u8),

    #[error("{name} must be at least 1, got {value}")]
    OutOfRange { name: &'static str, value: u64 },

    #[error("no elevator with id {0}")]
    UnknownElevator(u8),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}
