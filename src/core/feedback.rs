//! Guess feedback calculation and the per-round letter panel
//!
//! Each guessed letter is classified as:
//! - Exact (right letter, right position)
//! - Present (letter occurs at another, not yet matched position)
//! - Absent (no unmatched occurrence left in the target)

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Exact,
    Present,
    Absent,
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: [u8; WORD_LENGTH],
    marks: [LetterFeedback; WORD_LENGTH],
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those target positions
    /// 2. Second pass: for every unmarked guess position, scan the unconsumed
    ///    target positions left to right; the first matching one marks the
    ///    guess letter present and is consumed
    /// 3. Anything still unmarked is absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback, Word};
    ///
    /// let guess = Word::new("allee").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.marks()[0], LetterFeedback::Exact);
    /// assert_eq!(feedback.marks()[2], LetterFeedback::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut marks: [Option<LetterFeedback>; WORD_LENGTH] = [None; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: the same index addresses guess, target, marks and consumed
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                marks[i] = Some(LetterFeedback::Exact);
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i].is_some() {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(j) =
                (0..WORD_LENGTH).find(|&j| !consumed[j] && target.char_at(j) == letter)
            {
                marks[i] = Some(LetterFeedback::Present);
                consumed[j] = true;
            }
        }

        Self {
            guess: *guess.chars(),
            marks: marks.map(|mark| mark.unwrap_or(LetterFeedback::Absent)),
        }
    }

    /// Per-position classification
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.marks
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.marks.iter().all(|&m| m == LetterFeedback::Exact)
    }

    /// Iterate over `(letter, feedback)` pairs in guess order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterFeedback)> + '_ {
        self.guess.iter().copied().zip(self.marks.iter().copied())
    }
}

/// Best-known status of a letter across a round
///
/// Ordered so that a better status compares greater:
/// `Unused < Gray < Yellow < Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unused,
    Gray,
    Yellow,
    Green,
}

impl From<LetterFeedback> for LetterStatus {
    fn from(feedback: LetterFeedback) -> Self {
        match feedback {
            LetterFeedback::Exact => Self::Green,
            LetterFeedback::Present => Self::Yellow,
            LetterFeedback::Absent => Self::Gray,
        }
    }
}

/// Status of all 26 letters for a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterPanel {
    statuses: [LetterStatus; 26],
}

impl LetterPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a guess's feedback into the panel; a letter never downgrades
    pub fn record(&mut self, feedback: &Feedback) {
        for (letter, mark) in feedback.iter() {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.statuses[i]) {
                *slot = (*slot).max(LetterStatus::from(mark));
            }
        }
    }

    /// Status of a lowercase ASCII letter; anything else reports `Unused`
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        Self::index(letter).map_or(LetterStatus::Unused, |i| self.statuses[i])
    }

    /// Iterate over `(letter, status)` for `a..=z`
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'a'..=b'z').zip(self.statuses.iter().copied())
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Exact, Present};

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_all_exact() {
        let fb = feedback("crane", "crane");
        assert!(fb.is_perfect());
        assert_eq!(fb.marks(), &[Exact; 5]);
    }

    #[test]
    fn feedback_all_absent() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.marks(), &[Absent; 5]);
        assert!(!fb.is_perfect());
    }

    #[test]
    fn feedback_duplicate_guess_letters_single_target_letter() {
        // APPLE has a single L (index 3); its E is matched exactly at index 4
        let fb = feedback("allee", "apple");
        assert_eq!(fb.marks(), &[Exact, Present, Absent, Absent, Exact]);
    }

    #[test]
    fn feedback_present_takes_leftmost_unconsumed() {
        // Target L at index 2 is exact, so only index 3 is left for one more L
        let fb = feedback("lllxx", "xxllx");
        assert_eq!(fb.marks(), &[Present, Absent, Exact, Present, Exact]);
    }

    #[test]
    fn feedback_exact_consumes_before_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the other O
        let fb = feedback("robot", "floor");
        assert_eq!(fb.marks(), &[Present, Present, Absent, Exact, Absent]);
    }

    #[test]
    fn feedback_exact_match_blocks_later_present() {
        // Only one E in the target and it is matched exactly
        let fb = feedback("eerie", "crane");
        assert_eq!(fb.marks(), &[Absent, Absent, Present, Absent, Exact]);
    }

    #[test]
    fn feedback_real_example() {
        let fb = feedback("crane", "slate");
        assert_eq!(fb.marks(), &[Absent, Absent, Exact, Absent, Exact]);
    }

    #[test]
    fn feedback_iter_pairs_letters() {
        let fb = feedback("crane", "slate");
        let pairs: Vec<_> = fb.iter().collect();
        assert_eq!(pairs[0], (b'c', Absent));
        assert_eq!(pairs[2], (b'a', Exact));
    }

    #[test]
    fn letter_status_ordering() {
        assert!(LetterStatus::Green > LetterStatus::Yellow);
        assert!(LetterStatus::Yellow > LetterStatus::Gray);
        assert!(LetterStatus::Gray > LetterStatus::Unused);
    }

    #[test]
    fn panel_starts_unused() {
        let panel = LetterPanel::new();
        assert_eq!(panel.iter().count(), 26);
        assert!(panel.iter().all(|(_, s)| s == LetterStatus::Unused));
    }

    #[test]
    fn panel_best_status_wins() {
        let mut panel = LetterPanel::new();

        // 'a' exact, then later absent in another guess: stays green
        panel.record(&feedback("apple", "alert"));
        assert_eq!(panel.status(b'a'), LetterStatus::Green);
        assert_eq!(panel.status(b'l'), LetterStatus::Yellow);
        assert_eq!(panel.status(b'p'), LetterStatus::Gray);

        panel.record(&feedback("llama", "alert"));
        assert_eq!(panel.status(b'a'), LetterStatus::Green);
        assert_eq!(panel.status(b'l'), LetterStatus::Green);
        assert_eq!(panel.status(b'm'), LetterStatus::Gray);
        assert_eq!(panel.status(b'z'), LetterStatus::Unused);
    }

    #[test]
    fn panel_same_letter_mixed_in_one_guess() {
        // First L present, second L absent: present wins
        let mut panel = LetterPanel::new();
        panel.record(&feedback("allee", "apple"));
        assert_eq!(panel.status(b'l'), LetterStatus::Yellow);
        assert_eq!(panel.status(b'e'), LetterStatus::Green);
        assert_eq!(panel.status(b'a'), LetterStatus::Green);
    }

    #[test]
    fn panel_ignores_non_letters() {
        let panel = LetterPanel::new();
        assert_eq!(panel.status(b'!'), LetterStatus::Unused);
    }
}
