//! Core domain types for Wordle
//!
//! Words and the feedback rules that compare them. No I/O happens here.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback, LetterPanel, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
