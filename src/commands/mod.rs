//! Command implementations

pub mod play;
pub mod stats;

pub use play::{RoundReport, play_round};
pub use stats::show_stats;
