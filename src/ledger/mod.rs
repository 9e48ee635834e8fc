//! Per-player score ledger
//!
//! The whole table is held in memory and rewritten to disk after every
//! update. A missing file is an empty ledger.

pub mod table;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persisted statistics for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Highscore")]
    pub high_score: u32,
    #[serde(rename = "Pastgames")]
    pub games_played: u32,
}

impl PlayerRecord {
    fn first_game(name: &str, score: u32) -> Self {
        Self {
            name: name.to_string(),
            high_score: score,
            games_played: 1,
        }
    }

    fn record_game(&mut self, score: u32) {
        self.high_score = self.high_score.max(score);
        self.games_played = self.games_played.saturating_add(1);
    }
}

/// Error type for ledger persistence
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("score file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file is missing the {0:?} column")]
    MissingColumn(&'static str),
    #[error("score file line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Mapping of player name to [`PlayerRecord`], backed by a score file
#[derive(Debug)]
pub struct ScoreLedger {
    path: PathBuf,
    records: BTreeMap<String, PlayerRecord>,
}

impl ScoreLedger {
    /// Create an empty ledger that will persist to `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Open the ledger stored at `path`
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed. A missing file
    /// is not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let mut ledger = Self::new(path);
        ledger.load()?;
        Ok(ledger)
    }

    /// Replace the in-memory records with the contents of the score file
    ///
    /// # Errors
    ///
    /// See [`ScoreLedger::open`].
    pub fn load(&mut self) -> Result<(), LedgerError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no score file at {}, starting empty", self.path.display());
                self.records.clear();
                return Ok(());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        self.records = table::parse_table(content.as_bytes())?
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        debug!(
            "loaded {} player record(s) from {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Rewrite the whole score file from memory
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file cannot be created or written.
    pub fn save(&self) -> Result<(), LedgerError> {
        let write = || -> io::Result<()> {
            let mut out = BufWriter::new(File::create(&self.path)?);
            table::write_table(&mut out, self.records.values())?;
            out.flush()
        };
        write().map_err(|source| self.io_error(source))?;
        debug!(
            "wrote {} player record(s) to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Record a finished round for `player` and persist immediately
    ///
    /// Existing players keep the higher of their old and new score and gain
    /// one game; new players start with this score and one game.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the rewrite fails. The in-memory record
    /// is updated regardless.
    pub fn update(&mut self, player: &str, score: u32) -> Result<&PlayerRecord, LedgerError> {
        self.records
            .entry(player.to_string())
            .and_modify(|record| record.record_game(score))
            .or_insert_with(|| PlayerRecord::first_game(player, score));
        info!("recorded score {score} for {player}");

        self.save()?;
        Ok(&self.records[player])
    }

    #[must_use]
    pub fn get(&self, player: &str) -> Option<&PlayerRecord> {
        self.records.get(player)
    }

    /// All records, keyed and ordered by player name
    #[must_use]
    pub const fn get_all(&self) -> &BTreeMap<String, PlayerRecord> {
        &self.records
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
