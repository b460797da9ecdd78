use crate::app_dirs::AppDirs;
use crate::error::{Result, TyperError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub const NUM_WORDS_RANGE: RangeInclusive<usize> = 5..=100;
pub const MAX_WORD_LENGTH_RANGE: RangeInclusive<usize> = 1..=100;
pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

/// Where the words of a session come from
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WordSource {
    /// dictionary embedded in the binary
    Builtin,
    /// newline separated word list on disk
    File,
    /// random lowercase letters
    Letters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub num_words: usize,
    pub max_word_length: usize,
    pub source: WordSource,
    pub word_list: PathBuf,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_words: 15,
            max_word_length: 8,
            source: WordSource::Builtin,
            word_list: PathBuf::from(DEFAULT_WORD_LIST),
            strict: false,
        }
    }
}

impl Config {
    /// Applies the same range rules the command line enforces.
    pub fn validate(&self) -> Result<()> {
        check_num_words(self.num_words)?;
        check_max_word_length(self.max_word_length)?;
        Ok(())
    }
}

/// clap value parser for `--num-words`
pub fn parse_num_words(arg: &str) -> Result<usize> {
    let num_words = parse_digits(arg).ok_or(TyperError::NumWordsNotInteger)?;
    check_num_words(num_words)
}

/// clap value parser for `--max-word-length`
pub fn parse_max_word_length(arg: &str) -> Result<usize> {
    let max_word_length = parse_digits(arg).ok_or(TyperError::MaxWordLengthNotInteger)?;
    check_max_word_length(max_word_length)
}

// Signs and whitespace are rejected, huge values saturate and fail the range check.
fn parse_digits(arg: &str) -> Option<usize> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(arg.parse().unwrap_or(usize::MAX))
}

fn check_num_words(num_words: usize) -> Result<usize> {
    if NUM_WORDS_RANGE.contains(&num_words) {
        Ok(num_words)
    } else {
        Err(TyperError::NumWordsOutOfRange {
            min: *NUM_WORDS_RANGE.start(),
            max: *NUM_WORDS_RANGE.end(),
        })
    }
}

fn check_max_word_length(max_word_length: usize) -> Result<usize> {
    if MAX_WORD_LENGTH_RANGE.contains(&max_word_length) {
        Ok(max_word_length)
    } else {
        Err(TyperError::MaxWordLengthOutOfRange {
            min: *MAX_WORD_LENGTH_RANGE.start(),
            max: *MAX_WORD_LENGTH_RANGE.end(),
        })
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => {
                log::debug!("no config at {}, using defaults", self.path.display());
                return Config::default();
            }
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring malformed config {}: {e}", self.path.display());
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}
