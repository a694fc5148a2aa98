//! Discrete-tick simulation of a building with several elevators.
//!
//! The core is `Building`: it accepts passenger requests, dispatches elevators with a
//! nearest capable elevator heuristic and advances every elevator one floor per `tick`.
//! The `console` module is a thin text shell that drives it.

pub mod building;
pub mod config;
pub mod console;
pub mod elevator;
pub mod error;
pub mod shared;

pub use building::Building;
pub use building::Floor;
pub use config::Config;
pub use elevator::Elevator;
pub use error::{ConfigError, SimulationError};
pub use shared::{Direction, Passenger, PassengerState, TickReport};
