//! Wordle Game
//!
//! A console word-guessing game with per-player score tracking.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterFeedback, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.marks()[2], LetterFeedback::Exact);
//! ```

// Core domain types
pub mod core;

// Vocabulary storage and loading
pub mod wordlists;

// Persisted player scores
pub mod ledger;

// Game configuration and round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;
pub mod logging;

pub use error::GameError;
