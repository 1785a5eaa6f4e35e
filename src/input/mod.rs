use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Cannot read {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Nothing to gloss in {0}")]
    Empty(String),
}

/// Text picked up from a REPL source, ready for glossing.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod file;
