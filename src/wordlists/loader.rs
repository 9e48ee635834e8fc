//! Word list loading utilities
//!
//! Reads word files (one word per line) or converts the embedded list.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read a word file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist; callers treat this as "no words"
    #[error("word file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read word file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Load words from a file
///
/// Each line is trimmed and lowercased. When `limit` is set, only the first
/// `limit` lines are considered; blank or invalid lines inside that window are
/// skipped but still count toward it.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file is missing, and
/// [`LoadError::Io`] for any other read failure.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/five_letter_words.txt", Some(40)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    limit: Option<usize>,
) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(words_from_lines(content.lines(), limit))
}

/// Parse up to `limit` lines into words, skipping anything invalid
pub fn words_from_lines<'a, I>(lines: I, limit: Option<usize>) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!("skipping word list line {}: {trimmed:?} ({e})", index + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::BUILTIN_WORDS;
///
/// let words = words_from_slice(BUILTIN_WORDS);
/// assert_eq!(words.len(), BUILTIN_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn lines_are_trimmed_and_lowercased() {
        let words = words_from_lines(["  CRANE ", "Slate\t", "", "ab"], None);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn limit_counts_lines_not_words() {
        // Blank line at index 1 still uses up one slot of the limit
        let words = words_from_lines(["crane", "", "slate", "apple"], Some(3));
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nSLATE\nghost").unwrap();

        let words = load_from_file(file.path(), None).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_from_file_applies_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nghost\nplant").unwrap();

        let words = load_from_file(file.path(), Some(2)).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("nope.txt"), None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn load_from_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
