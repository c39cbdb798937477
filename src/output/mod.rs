//! Terminal output formatting
//!
//! Colored rendering of guesses, keyboards and statistics for the line-based
//! commands.

pub mod display;
pub mod formatters;

pub use display::{print_profile, print_simulation_summary, print_statistics};
