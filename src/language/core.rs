use crate::error::{Result, TyperError};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::fs;
use std::path::Path;

static LANG_DIR: Dir = include_dir!("src/lang");

#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    /// Loads one of the dictionaries embedded in the binary.
    pub fn new(name: &str) -> Result<Self> {
        let file_name = format!("{name}.json");
        let contents = LANG_DIR
            .get_file(&file_name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| TyperError::Dictionary(name.to_string()))?;

        let lang: Language =
            from_str(contents).map_err(|_| TyperError::Dictionary(name.to_string()))?;
        Ok(lang.normalized())
    }

    /// Reads a newline separated word list such as the system dictionary.
    pub fn from_word_list<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| TyperError::WordList {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<String> = contents.lines().map(str::to_string).collect();
        let lang = Language {
            name: path.display().to_string(),
            size: words.len() as u32,
            words,
        };
        Ok(lang.normalized())
    }

    /// Words no longer than `max_word_length` characters.
    pub fn words_up_to(&self, max_word_length: usize) -> Vec<String> {
        self.words
            .iter()
            .filter(|word| word.len() <= max_word_length)
            .cloned()
            .collect()
    }

    // keep purely alphabetic ASCII entries, lowercased
    fn normalized(mut self) -> Self {
        self.words = self
            .words
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_lowercase)
            .collect();
        self.size = self.words.len() as u32;
        self
    }
}
