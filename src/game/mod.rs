//! Game setup and round bookkeeping
//!
//! [`WordleGame`] owns the vocabulary and the score ledger. Rounds are driven
//! from [`crate::commands::play`].

mod round;

pub use round::{
    ATTEMPT_PENALTY, GuessOutcome, LOSING_SCORE, MAX_SCORE, MIN_WIN_SCORE, Round, RoundError,
    RoundState, win_score,
};

use crate::error::GameError;
use crate::ledger::{PlayerRecord, ScoreLedger};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{BUILTIN_WORDS, WordStore};
use log::{info, warn};
use rand::Rng;
use std::path::PathBuf;

/// Default location of the word file
pub const DEFAULT_WORDS_PATH: &str = "data/five_letter_words.txt";
/// Default location of the score file
pub const DEFAULT_SCORES_PATH: &str = "game_state.csv";
/// Default cap on word file lines read
pub const DEFAULT_WORD_LIMIT: usize = 40;
/// Default number of attempts per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 4;

/// Where the vocabulary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Builtin,
}

/// Explicit configuration for a game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub words: WordSource,
    pub scores_path: PathBuf,
    pub word_limit: Option<usize>,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: WordSource::File(PathBuf::from(DEFAULT_WORDS_PATH)),
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            word_limit: Some(DEFAULT_WORD_LIMIT),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A loaded game: vocabulary, scores and settings
#[derive(Debug)]
pub struct WordleGame {
    store: WordStore,
    ledger: ScoreLedger,
    max_attempts: usize,
    words_missing: bool,
}

impl WordleGame {
    /// Load the score ledger and vocabulary described by `config`
    ///
    /// A missing word file leaves the store empty and is reported through
    /// [`WordleGame::words_missing`]; a missing score file starts an empty
    /// ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if either file exists but cannot be read, or if the
    /// score file is malformed.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let ledger = ScoreLedger::open(&config.scores_path)?;

        let (store, words_missing): (WordStore, bool) = match &config.words {
            WordSource::Builtin => (words_from_slice(BUILTIN_WORDS).into_iter().collect(), false),
            WordSource::File(path) => match load_from_file(path, config.word_limit) {
                Ok(words) => (words.into_iter().collect(), false),
                Err(e) if e.is_not_found() => {
                    warn!("{e}");
                    (WordStore::new(), true)
                }
                Err(e) => return Err(e.into()),
            },
        };
        info!("loaded {} candidate word(s)", store.len());

        let mut game = Self::from_parts(store, ledger, config.max_attempts);
        game.words_missing = words_missing;
        Ok(game)
    }

    /// Assemble a game from already-built parts
    #[must_use]
    pub fn from_parts(store: WordStore, ledger: ScoreLedger, max_attempts: usize) -> Self {
        Self {
            store,
            ledger,
            max_attempts,
            words_missing: false,
        }
    }

    /// Start a new round with a random target, or `None` if there are no words
    #[must_use]
    pub fn new_round(&self) -> Option<Round> {
        self.new_round_with(&mut rand::rng())
    }

    pub fn new_round_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Round> {
        self.store
            .random_word_with(rng)
            .map(|target| Round::new(target.clone(), self.max_attempts))
    }

    /// Record a finished round's score for `player`
    ///
    /// # Errors
    ///
    /// Returns an error if the score file cannot be rewritten.
    pub fn record_result(&mut self, player: &str, score: u32) -> Result<&PlayerRecord, GameError> {
        Ok(self.ledger.update(player, score)?)
    }

    #[must_use]
    pub const fn store(&self) -> &WordStore {
        &self.store
    }

    #[must_use]
    pub const fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// True if the configured word file did not exist
    #[must_use]
    pub const fn words_missing(&self) -> bool {
        self.words_missing
    }
}
