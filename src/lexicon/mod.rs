//! Lexicon video-link checker
//!
//! Builds the public lexicon's video URL for every `{word, id}` entry,
//! probes it, and writes a `{date, found, missing}` summary.

pub mod probe;
pub mod slug;

pub use probe::{check_links, HttpProber, LinkReport, Prober};
pub use slug::{slugify, video_url};

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// File name prefix of the merged lexicon parts
pub const LEXICON_FILE_PREFIX: &str = "lexikon_sammanslagen_del_";

#[derive(Error, Debug)]
pub enum LinkCheckError {
    #[error("Cannot read lexicon directory {0}: {1}")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("Cannot read {0}: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),

    #[error("Malformed lexicon file {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("No `lexicon` list in {0}")]
    MissingLexicon(PathBuf),

    #[error("Cannot write report {0}: {1}")]
    WriteReport(PathBuf, #[source] std::io::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// One lexicon word with its sign id. Other fields in the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

#[derive(Deserialize)]
struct LexiconFile {
    lexicon: Option<Vec<LexiconEntry>>,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

pub fn load_lexicon_file(path: &Path) -> Result<Vec<LexiconEntry>, LinkCheckError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| LinkCheckError::ReadFile(path.to_path_buf(), e))?;
    let file: LexiconFile =
        serde_json::from_str(&raw).map_err(|e| LinkCheckError::Parse(path.to_path_buf(), e))?;
    file.lexicon
        .ok_or_else(|| LinkCheckError::MissingLexicon(path.to_path_buf()))
}

/// Every `lexikon_sammanslagen_del_*.json` in `dir`, in file-name order.
pub fn lexicon_files(dir: &Path) -> Result<Vec<PathBuf>, LinkCheckError> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| LinkCheckError::ReadDir(dir.to_path_buf(), e))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LEXICON_FILE_PREFIX) && name.ends_with(".json"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Concatenate all lexicon parts in `dir`. A part that cannot be read or
/// parsed is logged and skipped.
pub fn load_lexicon_dir(dir: &Path) -> Result<Vec<LexiconEntry>, LinkCheckError> {
    let files = lexicon_files(dir)?;
    if files.is_empty() {
        error!(dir = %dir.display(), "no lexicon files found");
    }

    let mut all = Vec::new();
    for file in files {
        match load_lexicon_file(&file) {
            Ok(entries) => all.extend(entries),
            Err(err) => error!(error = %err, "skipping lexicon file"),
        }
    }
    info!(count = all.len(), "lexicon entries loaded");
    Ok(all)
}
