//! Command implementations

pub mod account;
pub mod config;
pub mod simple;
pub mod simulate;
pub mod stats;

pub use simple::run_simple;
pub use simulate::{SimulatedGame, SimulationReport, run_simulation};
pub use stats::{StatsTarget, load_statistics};
