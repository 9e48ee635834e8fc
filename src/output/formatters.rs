//! Plain-text rendering of feedback and the letter panel

use crate::core::{Feedback, LetterFeedback, LetterPanel, LetterStatus};

/// Render one guessed letter: `[X]` exact, `(X)` present, `_` absent
#[must_use]
pub fn feedback_token(letter: u8, feedback: LetterFeedback) -> String {
    let upper = char::from(letter.to_ascii_uppercase());
    match feedback {
        LetterFeedback::Exact => format!("[{upper}]"),
        LetterFeedback::Present => format!("({upper})"),
        LetterFeedback::Absent => "_".to_string(),
    }
}

/// Format a guess's feedback as a single space-separated line
#[must_use]
pub fn feedback_line(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(letter, mark)| feedback_token(letter, mark))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one panel letter: `[X]` green, `(X)` yellow, `-X-` gray, ` X ` unused
#[must_use]
pub fn panel_token(letter: u8, status: LetterStatus) -> String {
    let upper = char::from(letter.to_ascii_uppercase());
    match status {
        LetterStatus::Green => format!("[{upper}]"),
        LetterStatus::Yellow => format!("({upper})"),
        LetterStatus::Gray => format!("-{upper}-"),
        LetterStatus::Unused => format!(" {upper} "),
    }
}

/// Format all 26 letters with their round status on one line
#[must_use]
pub fn letter_panel_line(panel: &LetterPanel) -> String {
    panel
        .iter()
        .map(|(letter, status)| panel_token(letter, status))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_line_all_exact() {
        assert_eq!(
            feedback_line(&feedback("crane", "crane")),
            "[C] [R] [A] [N] [E]"
        );
    }

    #[test]
    fn feedback_line_mixed() {
        assert_eq!(
            feedback_line(&feedback("allee", "apple")),
            "[A] (L) _ _ [E]"
        );
    }

    #[test]
    fn feedback_line_all_absent() {
        assert_eq!(feedback_line(&feedback("abcde", "fghij")), "_ _ _ _ _");
    }

    #[test]
    fn panel_line_lists_every_letter() {
        let line = letter_panel_line(&LetterPanel::new());
        for letter in 'A'..='Z' {
            assert!(line.contains(letter), "missing {letter}");
        }
        assert!(line.starts_with(" A   B "));
    }

    #[test]
    fn panel_line_marks_statuses() {
        let mut panel = LetterPanel::new();
        panel.record(&feedback("allee", "apple"));
        panel.record(&feedback("ghost", "apple"));

        let line = letter_panel_line(&panel);
        assert!(line.contains("[A]"));
        assert!(line.contains("(L)"));
        assert!(line.contains("[E]"));
        assert!(line.contains("-G-"));
        assert!(line.contains(" Z "));
    }
}
