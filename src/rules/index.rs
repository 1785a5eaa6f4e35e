use super::model::{FilterRuleSet, GrammarRuleSet};
use std::collections::HashSet;

/// Lowercase lookup sets compiled once from a `FilterRuleSet`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterIndex {
    disposable: HashSet<String>,
    context: HashSet<String>,
    time: HashSet<String>,
    location: HashSet<String>,
    negation: HashSet<String>,
    questions: HashSet<String>,
}

fn lowered<'a>(words: impl IntoIterator<Item = &'a String>) -> HashSet<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}

impl FilterIndex {
    pub fn new(rules: &FilterRuleSet) -> Self {
        let context = &rules.context_words;
        Self {
            disposable: lowered(rules.ignore_words.all()),
            context: lowered(context.all()),
            time: lowered(&context.time_words),
            location: lowered(&context.location_words),
            negation: lowered(&context.negation_words),
            questions: lowered(&rules.priority_words.categories.question_words),
        }
    }

    /// Index with only a disposable list and interrogative markers.
    pub fn from_lists(disposable: &[&str], questions: &[&str]) -> Self {
        Self {
            disposable: disposable.iter().map(|w| w.to_lowercase()).collect(),
            questions: questions.iter().map(|w| w.to_lowercase()).collect(),
            ..Self::default()
        }
    }

    pub fn with_negations(mut self, words: &[&str]) -> Self {
        self.negation.extend(words.iter().map(|w| w.to_lowercase()));
        self
    }

    /// Add the grammar rule set's removal categories to the disposable set.
    pub fn with_removals(mut self, grammar: &GrammarRuleSet) -> Self {
        self.disposable
            .extend(lowered(grammar.word_removal.categories.all()));
        self
    }

    pub fn is_disposable(&self, lower: &str) -> bool {
        self.disposable.contains(lower)
    }

    /// Time, location, negation or quantifier
    pub fn is_context(&self, lower: &str) -> bool {
        self.context.contains(lower)
    }

    pub fn is_time(&self, lower: &str) -> bool {
        self.time.contains(lower)
    }

    pub fn is_location(&self, lower: &str) -> bool {
        self.location.contains(lower)
    }

    pub fn is_negation(&self, lower: &str) -> bool {
        self.negation.contains(lower)
    }

    pub fn is_question(&self, lower: &str) -> bool {
        self.questions.contains(lower)
    }
}
