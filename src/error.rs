use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TyperError {
    #[error("number of words must be integer")]
    NumWordsNotInteger,

    #[error("number of words must be from {min} to {max}")]
    NumWordsOutOfRange { min: usize, max: usize },

    #[error("maximum word length must be integer")]
    MaxWordLengthNotInteger,

    #[error("maximum word length must be from {min} to {max}")]
    MaxWordLengthOutOfRange { min: usize, max: usize },

    #[error("could not read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("built-in dictionary `{0}` is missing or malformed")]
    Dictionary(String),

    #[error("no usable words of length {max_word_length} or less")]
    NoWords { max_word_length: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TyperError>;
