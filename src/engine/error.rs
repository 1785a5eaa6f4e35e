use std::io;
use thiserror::Error;

/// Errors surfaced to the binaries. Glossing itself never fails.
#[derive(Error, Debug)]
pub enum GlosaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(String),

    #[error("Invalid config {path}: {message}")]
    Config { path: String, message: String },
}

/// Failure while fetching or decoding one rule family.
///
/// The rule repository recovers from every variant by logging and leaving
/// the family absent, so these never reach a glossing caller.
#[derive(Error, Debug)]
pub enum RuleLoadError {
    #[error("could not read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: io::Error,
    },

    #[error("request for {resource} failed: {source}")]
    Http {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} answered with status {status}")]
    Status { resource: String, status: u16 },

    #[error("malformed JSON in {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource} has no `{section}` section")]
    MissingSection { resource: String, section: &'static str },

    #[error("unknown resource: {0}")]
    NotFound(String),
}

pub fn load_file_safe(path: &str) -> Result<String, GlosaError> {
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(GlosaError::EmptyFile(path.to_string()));
    }

    Ok(content)
}
