//! Console driver for one round
//!
//! Reads guesses line by line from any `BufRead` and writes prompts and
//! feedback to any `Write`, so the same loop serves stdin/stdout and tests.

use crate::core::{Feedback, WordError};
use crate::error::GameError;
use crate::game::{GuessOutcome, LOSING_SCORE, Round, RoundError, RoundState, WordleGame};
use crate::ledger::PlayerRecord;
use crate::output::{
    feedback_line, letter_panel_line, write_loss, write_player_summary, write_round_start,
    write_win,
};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Summary of a finished round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub target: String,
    pub state: RoundState,
    pub score: u32,
    pub record: PlayerRecord,
}

/// Play one round for `player` and record the result in the ledger
///
/// Returns `Ok(None)` without touching the ledger when there are no words to
/// choose from.
///
/// # Errors
///
/// Fails if the console cannot be read or written, if input ends before the
/// round is decided, or if the score file cannot be rewritten.
pub fn play_round<R, W>(
    game: &mut WordleGame,
    player: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<RoundReport>, GameError>
where
    R: BufRead,
    W: Write,
{
    if game.words_missing() {
        writeln!(out, "Word file not found.")?;
    }
    let Some(mut round) = game.new_round() else {
        writeln!(out, "No words available.")?;
        return Ok(None);
    };
    debug!("target word is {}", round.target());

    write_round_start(out, player, round.max_attempts())?;
    while !round.is_over() {
        write!(
            out,
            "Attempt {}/{} - Enter your guess: ",
            round.current_attempt(),
            round.max_attempts()
        )?;
        out.flush()?;

        let guess = read_guess(input)?;
        match round.submit(&guess) {
            Ok(GuessOutcome::Won { attempts, score }) => write_win(out, attempts, score)?,
            Ok(GuessOutcome::Miss(feedback)) => {
                write_feedback(out, &feedback, &round)?;
                let left = round.remaining_attempts();
                writeln!(
                    out,
                    "{left} {} left.",
                    if left == 1 { "attempt" } else { "attempts" }
                )?;
            }
            Ok(GuessOutcome::Lost(feedback)) => {
                write_feedback(out, &feedback, &round)?;
                write_loss(out, round.target().text())?;
            }
            Err(RoundError::InvalidGuess(e)) => {
                debug!("rejected guess {guess:?}: {e}");
                writeln!(out, "{}", invalid_guess_message(&e))?;
            }
            Err(RoundError::Finished) => break,
        }
    }

    let score = round.score().unwrap_or(LOSING_SCORE);
    info!(
        "{player} finished a round on {} after {} attempt(s), score {score}",
        round.target(),
        round.attempts_used()
    );
    let record = game.record_result(player, score)?.clone();
    write_player_summary(out, &record)?;

    Ok(Some(RoundReport {
        target: round.target().text().to_string(),
        state: round.state(),
        score,
        record,
    }))
}

fn write_feedback<W: Write>(
    out: &mut W,
    feedback: &Feedback,
    round: &Round,
) -> Result<(), GameError> {
    writeln!(out, "Feedback: {}", feedback_line(feedback))?;
    writeln!(out)?;
    writeln!(out, "Letter Panel:")?;
    writeln!(out, "{}", letter_panel_line(round.panel()))?;
    writeln!(out)?;
    Ok(())
}

fn invalid_guess_message(error: &WordError) -> &'static str {
    match error {
        WordError::InvalidLength(_) => "Invalid input. Please enter exactly 5 letters.",
        WordError::NonAscii | WordError::InvalidCharacters => {
            "Invalid input. Please use only the letters A-Z."
        }
    }
}

fn read_guess<R: BufRead>(input: &mut R) -> Result<String, GameError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(line.trim().to_lowercase())
}
