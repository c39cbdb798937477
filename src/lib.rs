//! Wordle
//!
//! A Wordle game engine: word validation, two-pass guess scoring, the
//! per-game state machine, keyboard hints and player statistics, with local
//! accounts and file-backed persistence.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::{GuessRecord, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let record = GuessRecord::new(guess, &target);
//! println!("{record}"); // CRANE ⬜⬜🟩⬜🟩
//! ```

// Core domain types
pub mod core;

// Game sessions and keyboard hints
pub mod game;

// Player statistics and their stores
pub mod stats;

// Word lists
pub mod wordlists;

// Local accounts and profiles
pub mod account;

// Configuration, paths and logging
pub mod config;
pub mod paths;
pub mod telemetry;

// JSON document files
pub mod persist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
