//! Terminal output formatting
//!
//! Plain-text feedback rendering plus colored display helpers.

pub mod display;
pub mod formatters;

pub use display::{
    write_loss, write_player_summary, write_round_start, write_stats_table, write_win,
};
pub use formatters::{feedback_line, letter_panel_line};
