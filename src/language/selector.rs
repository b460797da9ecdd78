use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::fmt::Debug;

/// Trait for different word selection strategies
pub trait WordSelector: Debug {
    /// Produce the next word of a session.
    fn next_word(&self, rng: &mut dyn RngCore) -> String;
}

/// Samples uniformly, with replacement, from a filtered dictionary
#[derive(Debug, Clone)]
pub struct DictionarySelector {
    words: Vec<String>,
}

impl DictionarySelector {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSelector for DictionarySelector {
    fn next_word(&self, rng: &mut dyn RngCore) -> String {
        self.words.choose(rng).cloned().unwrap_or_default()
    }
}

/// Builds nonsense words from random lowercase letters
#[derive(Debug, Clone, Copy)]
pub struct LetterSelector {
    max_word_length: usize,
}

impl LetterSelector {
    pub fn new(max_word_length: usize) -> Self {
        Self {
            max_word_length: max_word_length.max(1),
        }
    }
}

impl WordSelector for LetterSelector {
    fn next_word(&self, rng: &mut dyn RngCore) -> String {
        let len = rng.gen_range(1..=self.max_word_length);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }
}
