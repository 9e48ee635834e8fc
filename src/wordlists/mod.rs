//! Word lists for the game
//!
//! The [`WordStore`] holds the round vocabulary; [`loader`] fills it from a
//! file, and [`BUILTIN_WORDS`] is the list embedded at build time.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{BUILTIN_WORDS, BUILTIN_WORDS_COUNT};
pub use loader::LoadError;
pub use store::WordStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN_WORDS.len(), BUILTIN_WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        for &word in BUILTIN_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_words_fill_a_store() {
        let store: WordStore = loader::words_from_slice(BUILTIN_WORDS).into_iter().collect();
        assert_eq!(store.len(), BUILTIN_WORDS_COUNT);
    }
}
