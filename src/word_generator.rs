use crate::{
    config::{Config, WordSource},
    error::{Result, TyperError},
    language::{DictionarySelector, Language, LetterSelector, WordSelector},
};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::iter::FusedIterator;
use std::path::PathBuf;

const BUILTIN_LANGUAGE: &str = "english";

/// Configuration for word generation
#[derive(Debug, Clone)]
pub struct WordGenConfig {
    pub num_words: usize,
    pub max_word_length: usize,
    pub source: WordSource,
    pub word_list: PathBuf,
}

impl From<&Config> for WordGenConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            num_words: cfg.num_words,
            max_word_length: cfg.max_word_length,
            source: cfg.source,
            word_list: cfg.word_list.clone(),
        }
    }
}

/// Handles all word generation logic
#[derive(Debug)]
pub struct WordGenerator {
    num_words: usize,
    selector: Box<dyn WordSelector>,
}

impl WordGenerator {
    pub fn new(config: &WordGenConfig) -> Result<Self> {
        let selector: Box<dyn WordSelector> = match config.source {
            WordSource::Letters => Box::new(LetterSelector::new(config.max_word_length)),
            WordSource::Builtin => Box::new(dictionary_selector(
                Language::new(BUILTIN_LANGUAGE)?,
                config.max_word_length,
            )?),
            WordSource::File => Box::new(dictionary_selector(
                Language::from_word_list(&config.word_list)?,
                config.max_word_length,
            )?),
        };

        Ok(Self {
            num_words: config.num_words,
            selector,
        })
    }

    /// Consume the generator into its word sequence.
    pub fn into_words(self) -> Words<ThreadRng> {
        self.into_words_with_rng(rand::thread_rng())
    }

    pub fn into_words_with_rng<R: Rng>(self, rng: R) -> Words<R> {
        Words {
            selector: self.selector,
            rng,
            remaining: self.num_words,
        }
    }

    pub fn generate(self) -> Vec<String> {
        self.into_words().collect()
    }
}

fn dictionary_selector(language: Language, max_word_length: usize) -> Result<DictionarySelector> {
    let selector = DictionarySelector::new(language.words_up_to(max_word_length));
    log::debug!(
        "{}: {} of {} words are at most {max_word_length} letters",
        language.name,
        selector.len(),
        language.size
    );

    if selector.is_empty() {
        return Err(TyperError::NoWords { max_word_length });
    }
    Ok(selector)
}

/// Finite word sequence; each word is produced on demand and the sequence
/// cannot be rewound.
#[derive(Debug)]
pub struct Words<R> {
    selector: Box<dyn WordSelector>,
    rng: R,
    remaining: usize,
}

impl<R: Rng> Iterator for Words<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.selector.next_word(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Words<R> {}

impl<R: Rng> FusedIterator for Words<R> {}
