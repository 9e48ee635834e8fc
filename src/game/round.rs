//! State machine for a single round
//!
//! ```text
//! AwaitingGuess --valid guess--> Evaluating --correct--> Won
//!       ^                            |
//!       +------attempts left---------+--no attempts left--> Lost
//! ```
//!
//! Invalid guesses leave the round in `AwaitingGuess` without using an
//! attempt. `Evaluating` only exists inside [`Round::submit`].

use crate::core::{Feedback, LetterPanel, Word, WordError};
use thiserror::Error;

/// Score for a win on the first attempt
pub const MAX_SCORE: u32 = 100;
/// Points lost for each extra attempt before the win
pub const ATTEMPT_PENALTY: u32 = 25;
/// A win never scores below this
pub const MIN_WIN_SCORE: u32 = 10;
/// Score recorded for a lost round
pub const LOSING_SCORE: u32 = 0;

/// Score for winning on attempt number `attempt` (1-based)
#[must_use]
pub fn win_score(attempt: usize) -> u32 {
    let extra = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
    MAX_SCORE
        .saturating_sub(extra.saturating_mul(ATTEMPT_PENALTY))
        .max(MIN_WIN_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won { attempts: usize, score: u32 },
    Lost,
}

/// What happened to an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong guess, more attempts remain
    Miss(Feedback),
    Won { attempts: usize, score: u32 },
    /// Wrong guess on the final attempt
    Lost(Feedback),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("round is already over")]
    Finished,
}

/// One play-through against a fixed target word
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    max_attempts: usize,
    attempts_used: usize,
    panel: LetterPanel,
    state: RoundState,
}

impl Round {
    /// Start a round; `max_attempts` is raised to at least 1
    #[must_use]
    pub fn new(target: Word, max_attempts: usize) -> Self {
        Self {
            target,
            max_attempts: max_attempts.max(1),
            attempts_used: 0,
            panel: LetterPanel::new(),
            state: RoundState::AwaitingGuess,
        }
    }

    /// Evaluate raw player input
    ///
    /// Input is trimmed and lowercased. A guess that is not a valid
    /// 5-letter word is rejected without consuming an attempt.
    ///
    /// # Errors
    ///
    /// [`RoundError::InvalidGuess`] for malformed input and
    /// [`RoundError::Finished`] once the round has been won or lost.
    pub fn submit(&mut self, input: &str) -> Result<GuessOutcome, RoundError> {
        if self.is_over() {
            return Err(RoundError::Finished);
        }
        let guess = Word::new(input.trim())?;

        self.attempts_used += 1;
        if guess == self.target {
            let score = win_score(self.attempts_used);
            self.state = RoundState::Won {
                attempts: self.attempts_used,
                score,
            };
            return Ok(GuessOutcome::Won {
                attempts: self.attempts_used,
                score,
            });
        }

        let feedback = Feedback::calculate(&guess, &self.target);
        self.panel.record(&feedback);

        if self.attempts_used >= self.max_attempts {
            self.state = RoundState::Lost;
            Ok(GuessOutcome::Lost(feedback))
        } else {
            Ok(GuessOutcome::Miss(feedback))
        }
    }

    /// 1-based number of the attempt the next guess would use
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.attempts_used + 1
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, RoundState::AwaitingGuess)
    }

    /// Final score, once the round is over
    #[must_use]
    pub const fn score(&self) -> Option<u32> {
        match self.state {
            RoundState::AwaitingGuess => None,
            RoundState::Won { score, .. } => Some(score),
            RoundState::Lost => Some(LOSING_SCORE),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn panel(&self) -> &LetterPanel {
        &self.panel
    }
}
