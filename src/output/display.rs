//! Display functions for round events and score listings

use crate::ledger::PlayerRecord;
use colored::Colorize;
use std::io::{self, Write};

/// Banner shown when a round starts
///
/// # Errors
///
/// Propagates write failures.
pub fn write_round_start<W: Write>(
    out: &mut W,
    player: &str,
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "New game for {}. Try guessing the word!",
        player.bright_yellow().bold()
    )?;
    writeln!(
        out,
        "You have {max_attempts} {}. [X] = right spot, (X) = wrong spot, _ = not in word",
        if max_attempts == 1 { "attempt" } else { "attempts" }
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// # Errors
///
/// Propagates write failures.
pub fn write_win<W: Write>(out: &mut W, attempts: usize, score: u32) -> io::Result<()> {
    writeln!(out, "{}", "Correct! You win!".bright_green().bold())?;
    writeln!(
        out,
        "Solved in {} {} for {} points",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" },
        score.to_string().bright_yellow().bold()
    )
}

/// # Errors
///
/// Propagates write failures.
pub fn write_loss<W: Write>(out: &mut W, target: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "Game over! The word was:".bright_red().bold(),
        target.bright_white().bold()
    )
}

/// One-line summary of a player's record after a round
///
/// # Errors
///
/// Propagates write failures.
pub fn write_player_summary<W: Write>(out: &mut W, record: &PlayerRecord) -> io::Result<()> {
    writeln!(
        out,
        "{}: high score {}, games played {}",
        record.name.bold(),
        record.high_score,
        record.games_played
    )
}

/// Table of every player record
///
/// # Errors
///
/// Propagates write failures.
pub fn write_stats_table<'a, W, I>(out: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    let records: Vec<&PlayerRecord> = records.into_iter().collect();
    if records.is_empty() {
        return writeln!(out, "No games recorded yet.");
    }

    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    writeln!(
        out,
        "{:<name_width$}  {:>10}  {:>6}",
        "Player".bold(),
        "High score".bold(),
        "Games".bold()
    )?;
    writeln!(out, "{}", "─".repeat(name_width + 20).cyan())?;
    for record in records {
        writeln!(
            out,
            "{:<name_width$}  {:>10}  {:>6}",
            record.name, record.high_score, record.games_played
        )?;
    }
    Ok(())
}
