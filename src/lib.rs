// Library surface for the binary, headless integration tests and reuse.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod language;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod terminal;
pub mod typing_policy;
pub mod ui;
pub mod word_generator;

pub use error::{Result, TyperError};
