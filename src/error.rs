//! Error taxonomy for the game
//!
//! Missing word or score files are recovered where they are read and never
//! reach this type. Everything here is unexpected and is reported once at the
//! top level.

use crate::ledger::LedgerError;
use crate::wordlists::LoadError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before the round finished")]
    InputClosed,
}
