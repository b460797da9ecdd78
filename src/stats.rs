use std::fmt;
use std::time::Duration;

/// Standard word length used to turn characters into words.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Gross typing speed: every typed character counts, mistakes included.
pub fn words_per_minute(total_chars: usize, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes == 0.0 {
        return 0.0;
    }
    (total_chars as f64 / CHARS_PER_WORD) / minutes
}

/// Percentage of typed characters that matched the target.
pub fn accuracy(correct_chars: usize, total_chars: usize) -> f64 {
    if total_chars == 0 {
        return 0.0;
    }
    correct_chars as f64 / total_chars as f64 * 100.0
}

/// Speed discounted by accuracy.
pub fn net_words_per_minute(wpm: f64, accuracy: f64) -> f64 {
    wpm * accuracy / 100.0
}

/// Summary printed once a session completes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub elapsed: Duration,
    pub total_chars: usize,
    pub correct_chars: usize,
    pub wpm: f64,
    pub accuracy: f64,
    pub net_wpm: f64,
}

impl Report {
    pub fn new(total_chars: usize, correct_chars: usize, elapsed: Duration) -> Self {
        let wpm = words_per_minute(total_chars, elapsed);
        let accuracy = accuracy(correct_chars, total_chars);
        Self {
            elapsed,
            total_chars,
            correct_chars,
            wpm,
            accuracy,
            net_wpm: net_words_per_minute(wpm, accuracy),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Words/Minute: {:.1}", self.wpm)?;
        writeln!(f, "Accuracy: {:.1}%", self.accuracy)?;
        writeln!(f, "Net Words/Minute: {:.1}", self.net_wpm)?;
        write!(f, "Time: {:.1}s", self.elapsed.as_secs_f64())
    }
}
