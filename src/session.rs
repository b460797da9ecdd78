use crate::stats::Report;
use crate::typing_policy::TypingPolicy;
use itertools::Itertools;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Input {
    pub char: char,
    pub outcome: Outcome,
}

/// One typing test: the target text and everything typed against it
#[derive(Debug, Clone)]
pub struct Session {
    pub target_words: Vec<String>,
    pub input: Vec<Input>,
    pub policy: TypingPolicy,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub correct_chars: usize,
    pub total_chars: usize,
    prompt: String,
    expected: Vec<char>,
}

impl Session {
    pub fn new(target_words: Vec<String>, policy: TypingPolicy) -> Self {
        let prompt = target_words.iter().join(" ");
        let expected = prompt.chars().collect();
        Self {
            target_words,
            input: Vec::new(),
            policy,
            started_at: None,
            finished_at: None,
            correct_chars: 0,
            total_chars: 0,
            prompt,
            expected,
        }
    }

    /// Target words joined by single spaces.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn target_len(&self) -> usize {
        self.expected.len()
    }

    pub fn cursor_pos(&self) -> usize {
        self.input.len()
    }

    pub fn expected_chars(&self) -> &[char] {
        &self.expected
    }

    pub fn expected_char(&self, idx: usize) -> Option<char> {
        self.expected.get(idx).copied()
    }

    pub fn typed(&self) -> String {
        self.input.iter().map(|i| i.char).collect()
    }

    pub fn has_error(&self) -> bool {
        self.input.iter().any(|i| i.outcome == Outcome::Incorrect)
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn write(&mut self, c: char) {
        self.write_at(c, Instant::now());
    }

    /// Judge `c` against the next expected character and buffer it.
    /// Keystrokes the typing policy refuses are not counted.
    pub fn write_at(&mut self, c: char, now: Instant) {
        if self.has_finished() {
            return;
        }
        let Some(outcome) = self.policy.judge(self, c) else {
            return;
        };

        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        self.total_chars += 1;
        if outcome == Outcome::Correct {
            self.correct_chars += 1;
        }
        self.input.push(Input { char: c, outcome });

        if self.policy.is_complete(self) {
            self.finished_at = Some(now);
        }
    }

    /// Drop the most recently typed character. Earlier input is untouched.
    pub fn backspace(&mut self) {
        if self.has_finished() {
            return;
        }
        if let Some(removed) = self.input.pop() {
            if removed.outcome == Outcome::Correct {
                self.correct_chars -= 1;
            }
        }
    }

    /// Time between the first keystroke and the finishing one, or until now
    /// while the session is still running.
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn report(&self) -> Report {
        Report::new(self.total_chars, self.correct_chars, self.elapsed())
    }
}
