pub mod core;
pub mod selector;

// Re-export the main types for convenience
pub use core::Language;
pub use selector::{DictionarySelector, LetterSelector, WordSelector};
