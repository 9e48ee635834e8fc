//! In-memory vocabulary with uniform random selection

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// The set of candidate target words
///
/// Insertion order is kept so selection over a seeded RNG is reproducible.
/// Duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<Word>,
    seen: FxHashSet<Word>,
}

impl WordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word; returns `false` if it was already present
    pub fn insert(&mut self, word: Word) -> bool {
        if self.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Pick a word uniformly at random, or `None` if the store is empty
    #[must_use]
    pub fn random_word(&self) -> Option<&Word> {
        self.random_word_with(&mut rand::rng())
    }

    /// Same as [`random_word`](Self::random_word) with a caller-supplied RNG
    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordStore {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<Word> for WordStore {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
