use super::filter::{carry_commas, filter_tokens, filter_words};
use super::normalize::Normalizer;
use super::reorder::{reorder_tokens, reorder_words};
use super::synth::{synthesize, GlossVariants};
use super::tables::STATIC_INDEX;
use super::token::Token;
use crate::engine::config::{Config, SentenceConfig};
use crate::rules::{FilterIndex, RuleSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rule set drives filtering and interrogative detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Rules loaded through the repository; identity when they are absent
    RepositoryRules,
    /// Built-in stopword, question-word, lemma and number tables
    #[default]
    StaticTable,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" | "repository" | "repository-rules" => Ok(Profile::RepositoryRules),
            "static" | "static-table" => Ok(Profile::StaticTable),
            other => Err(format!("Unknown profile: {other} (expected `rules` or `static`)")),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::RepositoryRules => f.write_str("repository-rules"),
            Profile::StaticTable => f.write_str("static-table"),
        }
    }
}

/// Output of the repository-rules transformation.
///
/// `reordered` is always a permutation of `filtered`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlossResult {
    pub filtered: Vec<Token>,
    pub reordered: Vec<Token>,
}

/// One sentence of a multi-sentence text, glossed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceGloss {
    pub source: String,
    pub is_question: bool,
    pub variants: GlossVariants,
}

impl SentenceGloss {
    /// Standard variant closed with `?` or `.`
    pub fn rendered(&self) -> String {
        format!("{}{}", self.variants.standard, self.mark())
    }

    pub fn rendered_alternative(&self) -> String {
        format!("{}{}", self.variants.alternative, self.mark())
    }

    fn mark(&self) -> char {
        if self.is_question {
            '?'
        } else {
            '.'
        }
    }
}

/// Confidence reported for texts too short to judge
const SHORT_TEXT_CONFIDENCE: f64 = 0.3;

/// Glossing pipeline: normalizer, filter, reorder and synthesizer bound to
/// one rule snapshot. Cheap to rebuild whenever the snapshot changes.
#[derive(Debug, Clone, Default)]
pub struct Glosser {
    normalizer: Normalizer,
    index: Option<FilterIndex>,
    sentences: SentenceConfig,
}

impl Glosser {
    pub fn new(config: &Config, rules: &RuleSnapshot) -> Self {
        Self {
            normalizer: Normalizer::new(&config.normalizer),
            index: rules.filter_index(config.filter.use_grammar_removals),
            sentences: config.sentences.clone(),
        }
    }

    /// Pipeline with no repository rules; the repository-rules profile
    /// degrades to pass-through.
    pub fn without_rules(config: &Config) -> Self {
        Self::new(config, &RuleSnapshot::default())
    }

    pub fn has_rules(&self) -> bool {
        self.index.is_some()
    }

    /// Repository-rules profile: normalize, filter, reorder.
    pub fn apply_sign_language_transformation(&self, text: &str) -> GlossResult {
        let tokens = self.normalizer.tokenize(text);
        let filtered = filter_tokens(&tokens, self.index.as_ref());
        let reordered = reorder_tokens(&filtered, self.index.as_ref());
        GlossResult { filtered, reordered }
    }

    /// Static-table profile: built-in stopwords, lemma and number tables,
    /// question word moved to the end. Ignores repository rules.
    pub fn gloss_basic(&self, text: &str) -> GlossVariants {
        self.gloss(text, Profile::StaticTable)
    }

    /// Gloss `text` with the selected profile.
    pub fn gloss(&self, text: &str, profile: Profile) -> GlossVariants {
        let tokens = self.normalizer.tokenize(text);
        let ordered = self.sign_order(&tokens, profile);
        synthesize(&ordered, |t| self.is_question(profile, &t.lower))
    }

    /// Split into sentences and gloss each one on its own. Commas are carried
    /// and negations moved last when the sentence settings ask for it.
    pub fn gloss_sentences(&self, text: &str, profile: Profile) -> Vec<SentenceGloss> {
        self.normalizer
            .split_sentences(text)
            .into_iter()
            .filter_map(|sentence| {
                let mut tokens = self.normalizer.tokenize(sentence.text);
                let starts_with_question = tokens
                    .first()
                    .is_some_and(|t| self.is_question(profile, &t.lower));

                if self.sentences.carry_commas {
                    tokens = carry_commas(&tokens, self.index_for(profile));
                }
                let mut ordered = self.sign_order(&tokens, profile);
                if self.sentences.negation_last {
                    ordered = self.negation_last(ordered, profile);
                }

                let variants = synthesize(&ordered, |t| self.is_question(profile, &t.lower));
                if variants.standard.is_empty() {
                    return None;
                }
                Some(SentenceGloss {
                    source: sentence.text.to_string(),
                    is_question: sentence.ends_with_question_mark() || starts_with_question,
                    variants,
                })
            })
            .collect()
    }

    /// Share of words the tables and loaded rules know, scaled by 1.5 and
    /// capped at 1. Very short texts score 0.3.
    pub fn confidence(&self, text: &str) -> f64 {
        let tokens = self.normalizer.tokenize(text);
        if text.trim().chars().count() < 5 || tokens.is_empty() {
            return SHORT_TEXT_CONFIDENCE;
        }
        let known = tokens.iter().filter(|t| self.is_known(&t.lower)).count();
        (known as f64 / tokens.len() as f64 * 1.5).min(1.0)
    }

    /// Filter stage over plain words. Identity without rules.
    pub fn filter_words_for_sign_language(&self, words: &[&str]) -> Vec<String> {
        filter_words(words, self.index.as_ref())
    }

    /// Reorder stage over plain words. Identity without rules.
    pub fn reorder_for_sign_language(&self, words: &[&str]) -> Vec<String> {
        reorder_words(words, self.index.as_ref())
    }

    fn index_for(&self, profile: Profile) -> Option<&FilterIndex> {
        match profile {
            Profile::StaticTable => Some(&*STATIC_INDEX),
            Profile::RepositoryRules => self.index.as_ref(),
        }
    }

    /// Filtered tokens in sign order: the static profile keeps source
    /// order, the repository profile reorders.
    fn sign_order(&self, tokens: &[Token], profile: Profile) -> Vec<Token> {
        let index = self.index_for(profile);
        let filtered = filter_tokens(tokens, index);
        match profile {
            Profile::StaticTable => filtered,
            Profile::RepositoryRules => reorder_tokens(&filtered, index),
        }
    }

    /// Stable move of negation words behind everything else.
    fn negation_last(&self, tokens: Vec<Token>, profile: Profile) -> Vec<Token> {
        let (negations, mut rest): (Vec<Token>, Vec<Token>) = tokens
            .into_iter()
            .partition(|t| self.is_negation(profile, &t.lower));
        rest.extend(negations);
        rest
    }

    /// Interrogative markers for the static profile are the built-in list.
    /// The repository profile uses the loaded rules, falling back to the
    /// built-in list.
    fn is_question(&self, profile: Profile, lower: &str) -> bool {
        match (profile, &self.index) {
            (Profile::RepositoryRules, Some(index)) => index.is_question(lower),
            _ => STATIC_INDEX.is_question(lower),
        }
    }

    fn is_negation(&self, profile: Profile, lower: &str) -> bool {
        match (profile, &self.index) {
            (Profile::RepositoryRules, Some(index)) => index.is_negation(lower),
            _ => STATIC_INDEX.is_negation(lower),
        }
    }

    fn is_known(&self, lower: &str) -> bool {
        self.normalizer.has_entry(lower)
            || STATIC_INDEX.is_disposable(lower)
            || self
                .index
                .as_ref()
                .is_some_and(|index| index.is_disposable(lower) || index.is_time(lower))
    }
}
