use crate::session::{Outcome, Session};

/// How keystrokes are judged and when a session counts as complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingPolicy {
    /// Every keystroke advances; the test ends once the buffer is as long as the target.
    #[default]
    Normal,
    /// Mistakes block progress: after an uncorrected error everything is wrong
    /// until it is backspaced, and the test only ends on an exact match.
    Strict,
}

impl TypingPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            TypingPolicy::Strict
        } else {
            TypingPolicy::Normal
        }
    }

    /// Outcome of typing `c` next, or `None` when the keystroke is refused.
    pub fn judge(self, session: &Session, c: char) -> Option<Outcome> {
        let expected = session.expected_char(session.cursor_pos())?;
        let outcome = if c == expected {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        match self {
            TypingPolicy::Normal => Some(outcome),
            TypingPolicy::Strict if session.has_error() => Some(Outcome::Incorrect),
            TypingPolicy::Strict => Some(outcome),
        }
    }

    pub fn is_complete(self, session: &Session) -> bool {
        let full = session.cursor_pos() == session.target_len();
        match self {
            TypingPolicy::Normal => full,
            TypingPolicy::Strict => full && !session.has_error(),
        }
    }
}
