// Configuration for the glossing engine, rule loading and the link checker.
// Every section has a usable Default so an absent config file is fine.

use super::error::{load_file_safe, GlosaError};
use crate::glossing::Profile;
use crate::lexicon::slug::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const RULES_DIR_ENV: &str = "GLOSA_RULES_DIR";
pub const RULES_URL_ENV: &str = "GLOSA_RULES_URL";

/// Tokenizer and substitution settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Characters stripped from the end of each token (default `?`, `!`, `.`)
    pub terminal_punctuation: Vec<char>,

    /// Clause punctuation also stripped from the end of each token (default `,`, `;`, `:`).
    /// Never ends a sentence.
    pub clause_punctuation: Vec<char>,

    /// Extra inflected form → gloss entries, merged over the built-in lemma table
    pub extra_lemmas: HashMap<String, String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            terminal_punctuation: vec!['?', '!', '.'],
            clause_punctuation: vec![',', ';', ':'],
            extra_lemmas: HashMap::new(),
        }
    }
}

/// Filter stage settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Also discard the grammar rule set's `wordRemoval` categories
    pub use_grammar_removals: bool,
}

/// Per-sentence rendering used by `gloss_sentences`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SentenceConfig {
    /// Move negation words behind the other signs of the sentence
    pub negation_last: bool,

    /// Keep commas from the source, moving them off words that are dropped
    pub carry_commas: bool,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            negation_last: true,
            carry_commas: true,
        }
    }
}

/// Where the two rule documents come from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuleSourceConfig {
    /// Local directory holding the rule documents. Wins over `base_url`.
    pub dir: Option<PathBuf>,

    /// HTTP base the resource paths are appended to
    pub base_url: Option<String>,

    pub filter_resource: String,
    pub grammar_resource: String,

    /// Per-request timeout for the HTTP source
    pub timeout_secs: u64,
}

impl Default for RuleSourceConfig {
    fn default() -> Self {
        Self {
            dir: None,
            base_url: None,
            filter_resource: "word-filters.json".to_string(),
            grammar_resource: "glosa/god_glossing.json".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Lexicon video-link checker settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkCheckConfig {
    /// Directory scanned for `lexikon_sammanslagen_del_*.json`
    pub lexicon_dir: PathBuf,

    /// Where the `{date, found, missing}` summary is written
    pub output: PathBuf,

    /// Number of probes in flight at once (default 10)
    pub width: usize,

    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for LinkCheckConfig {
    fn default() -> Self {
        Self {
            lexicon_dir: PathBuf::from("snabb"),
            output: PathBuf::from("video_check_results.json"),
            width: 10,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: Profile,
    pub normalizer: NormalizerConfig,
    pub filter: FilterConfig,
    pub sentences: SentenceConfig,
    pub rules: RuleSourceConfig,
    pub links: LinkCheckConfig,
}

impl Config {
    /// Read an optional TOML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, GlosaError> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, GlosaError> {
        let display = path.display().to_string();
        let content = load_file_safe(&display)?;
        Self::from_toml_str(&content).map_err(|message| GlosaError::Config {
            path: display,
            message,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(RULES_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.rules.dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(url) = std::env::var(RULES_URL_ENV) {
            if !url.trim().is_empty() {
                self.rules.base_url = Some(url);
            }
        }
    }
}
