// Rule documents as served in `word-filters.json` and `god_glossing.json`.
// Every field is optional on the wire; a missing list is an empty list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter rules: what to discard, what to always keep.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRuleSet {
    pub ignore_words: IgnoreWords,
    pub priority_words: PriorityWords,
    pub context_words: ContextWords,
    pub add_words: AddWords,
}

/// Disposable categories
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IgnoreWords {
    pub stopwords: Vec<String>,
    pub articles: Vec<String>,
    pub copula: Vec<String>,
    pub prepositions: Vec<String>,
    pub conjunctions: Vec<String>,
}

impl IgnoreWords {
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.stopwords
            .iter()
            .chain(&self.articles)
            .chain(&self.copula)
            .chain(&self.prepositions)
            .chain(&self.conjunctions)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PriorityWords {
    pub categories: PriorityCategories,
}

/// Word-class flags are carried for rule extension; only the
/// interrogative list affects the engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriorityCategories {
    pub nouns: bool,
    pub verbs: bool,
    pub adjectives: bool,
    pub adverbs: bool,
    pub question_words: Vec<String>,
}

/// Context-bearing classes, never filtered out
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextWords {
    pub time_words: Vec<String>,
    pub location_words: Vec<String>,
    pub negation_words: Vec<String>,
    pub quantifiers: Vec<String>,
}

impl ContextWords {
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.time_words
            .iter()
            .chain(&self.location_words)
            .chain(&self.negation_words)
            .chain(&self.quantifiers)
    }
}

/// Facial, emphasis and clarifier tags. Reserved; they never change order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddWords {
    pub facial_markers: Vec<String>,
    pub emphasizers: Vec<String>,
    pub clarifiers: Vec<String>,
}

/// Grammar rules: word-order descriptors and removal categories.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrammarRuleSet {
    pub word_order: WordOrder,
    pub word_removal: WordRemoval,
}

impl GrammarRuleSet {
    /// Word-order rules, highest priority first. Ties keep document order.
    pub fn rules_by_priority(&self) -> Vec<&WordOrderRule> {
        let mut rules: Vec<&WordOrderRule> = self.word_order.rules.iter().collect();
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        rules
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordOrder {
    pub rules: Vec<WordOrderRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordOrderRule {
    pub id: String,
    pub name: String,
    pub priority: i32,

    /// Rule-specific payload such as `directionVerbs`, kept as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Payload key for verbs whose sign direction follows subject and object
pub const DIRECTION_VERBS: &str = "directionVerbs";

impl WordOrderRule {
    /// A string list stored under `key` in the rule payload, if any.
    pub fn word_list(&self, key: &str) -> Vec<String> {
        self.extra
            .get(key)
            .and_then(|value| value.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordRemoval {
    pub categories: RemovalCategories,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RemovalCategories {
    pub articles: Vec<String>,
    pub copula: Vec<String>,
    pub prepositions_optional: Vec<String>,
    pub conjunctions_optional: Vec<String>,
    pub pronouns_implied: Vec<String>,
}

impl RemovalCategories {
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.articles
            .iter()
            .chain(&self.copula)
            .chain(&self.prepositions_optional)
            .chain(&self.conjunctions_optional)
            .chain(&self.pronouns_implied)
    }
}
