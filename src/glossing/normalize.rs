use super::tables::{lemma_for, number_for};
use super::token::Token;
use crate::engine::config::NormalizerConfig;
use std::collections::HashMap;

/// Tokenizer plus number/lemma substitution.
#[derive(Debug, Clone)]
pub struct Normalizer {
    terminal_punctuation: Vec<char>,
    clause_punctuation: Vec<char>,
    extra_lemmas: HashMap<String, String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            terminal_punctuation: config.terminal_punctuation.clone(),
            clause_punctuation: config.clause_punctuation.clone(),
            extra_lemmas: config
                .extra_lemmas
                .iter()
                .map(|(form, gloss)| (form.to_lowercase(), gloss.clone()))
                .collect(),
        }
    }

    /// Split on whitespace, strip trailing terminal and clause punctuation
    /// and resolve glosses.
    /// Words that were nothing but punctuation are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .filter_map(|word| {
                let (text, punctuation) = self.extract_punctuation(word);
                if text.is_empty() {
                    return None;
                }
                let lower = text.to_lowercase();
                let gloss = self.gloss_form(&lower, &text);
                Some(Token {
                    text,
                    lower,
                    gloss,
                    punctuation,
                    comma_after: false,
                })
            })
            .collect()
    }

    /// Number table first, then lemmas, else the word in uppercase.
    pub fn gloss_form(&self, lower: &str, text: &str) -> String {
        if let Some(number) = number_for(lower) {
            return number.to_string();
        }
        if let Some(lemma) = self.extra_lemmas.get(lower) {
            return lemma.clone();
        }
        match lemma_for(lower) {
            Some(lemma) => lemma.to_string(),
            None => text.to_uppercase(),
        }
    }

    /// Whether the number or lemma tables know this lowercase word.
    pub fn has_entry(&self, lower: &str) -> bool {
        number_for(lower).is_some() || self.extra_lemmas.contains_key(lower) || lemma_for(lower).is_some()
    }

    fn is_terminal(&self, c: char) -> bool {
        self.terminal_punctuation.contains(&c)
    }

    fn is_strippable(&self, c: char) -> bool {
        self.is_terminal(c) || self.clause_punctuation.contains(&c)
    }

    fn extract_punctuation(&self, word: &str) -> (String, Vec<char>) {
        let mut chars: Vec<char> = word.chars().collect();
        let mut punctuation = Vec::new();

        while let Some(&last) = chars.last() {
            if !self.is_strippable(last) {
                break;
            }
            punctuation.push(last);
            chars.pop();
        }
        punctuation.reverse();

        (chars.into_iter().collect(), punctuation)
    }

    /// Split text into sentences. A sentence ends at a word carrying
    /// terminal punctuation or at the end of the input; line breaks are
    /// ordinary whitespace.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;
        let mut offset = 0;

        for word in text.split_whitespace() {
            // split_whitespace yields subslices of `text`, in order
            let word_start = offset + text[offset..].find(word).unwrap_or(0);
            offset = word_start + word.len();
            let begin = *start.get_or_insert(word_start);

            let bare = word.trim_end_matches(|c| self.is_terminal(c));
            if bare.len() < word.len() {
                sentences.push(Sentence {
                    text: &text[begin..offset],
                    punctuation: &word[bare.len()..],
                });
                start = None;
            }
        }

        if let Some(begin) = start {
            sentences.push(Sentence {
                text: text[begin..].trim_end(),
                punctuation: "",
            });
        }

        sentences
    }
}

/// A slice of input text ending a sentence, with its closing punctuation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    /// e.g. `"?!"`; empty when the input ended without punctuation
    pub punctuation: &'a str,
}

impl Sentence<'_> {
    pub fn ends_with_question_mark(&self) -> bool {
        self.punctuation.contains('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glosses(text: &str) -> Vec<String> {
        Normalizer::default()
            .tokenize(text)
            .into_iter()
            .map(|t| t.gloss)
            .collect()
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(Normalizer::default().tokenize("").is_empty());
        assert!(Normalizer::default().tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_strips_terminal_punctuation() {
        let tokens = Normalizer::default().tokenize("Vad heter du?!");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Vad");
        assert_eq!(tokens[0].lower, "vad");
        assert_eq!(tokens[2].text, "du");
        assert_eq!(tokens[2].punctuation, vec!['?', '!']);
    }

    #[test]
    fn test_mid_token_punctuation_is_kept() {
        let tokens = Normalizer::default().tokenize("kl 3.5 t.ex.");
        assert_eq!(tokens[1].text, "3.5");
        assert_eq!(tokens[2].text, "t.ex");
        assert_eq!(tokens[2].punctuation, vec!['.']);
    }

    #[test]
    fn test_pure_punctuation_words_are_dropped() {
        let tokens = Normalizer::default().tokenize("hej ... ? du");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hej", "du"]);
    }

    #[test]
    fn test_number_beats_lemma_and_uppercase_fallback() {
        assert_eq!(glosses("jag har fem bollar"), vec!["JAG", "HA", "5", "BOLLAR"]);
        assert_eq!(glosses("Ett TIO"), vec!["1", "10"]);
    }

    #[test]
    fn test_lemma_lookup_is_case_insensitive() {
        assert_eq!(glosses("Heter GICK barnen"), vec!["HETA", "GÅ", "BARN"]);
    }

    #[test]
    fn test_swedish_letters_uppercase() {
        assert_eq!(glosses("hälsa öga"), vec!["HÄLSA", "ÖGA"]);
    }

    #[test]
    fn test_extra_lemmas_override_table() {
        let mut config = NormalizerConfig::default();
        config.extra_lemmas.insert("Läser".to_string(), "LÄSA".to_string());
        config.extra_lemmas.insert("har".to_string(), "HAVA".to_string());
        let normalizer = Normalizer::new(&config);

        let tokens = normalizer.tokenize("jag läser har");
        let glosses: Vec<&str> = tokens.iter().map(|t| t.gloss.as_str()).collect();
        assert_eq!(glosses, vec!["JAG", "LÄSA", "HAVA"]);
    }

    #[test]
    fn test_custom_terminal_punctuation() {
        let config = NormalizerConfig {
            terminal_punctuation: vec![',', '.'],
            ..NormalizerConfig::default()
        };
        let tokens = Normalizer::new(&config).tokenize("hej, du?");
        assert_eq!(tokens[0].text, "hej");
        assert_eq!(tokens[1].text, "du?");
    }

    #[test]
    fn test_split_sentences() {
        let normalizer = Normalizer::default();
        let sentences = normalizer.split_sentences("Vad heter du? Jag heter Anna.\nidag regnar det");

        assert_eq!(
            sentences,
            vec![
                Sentence { text: "Vad heter du?", punctuation: "?" },
                Sentence { text: "Jag heter Anna.", punctuation: "." },
                Sentence { text: "idag regnar det", punctuation: "" },
            ]
        );
    }

    #[test]
    fn test_split_sentences_keeps_decimals_together() {
        let normalizer = Normalizer::default();
        let sentences = normalizer.split_sentences("det kostar 3.5 kronor!  ");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "det kostar 3.5 kronor!");
        assert_eq!(sentences[0].punctuation, "!");
    }

    #[test]
    fn test_split_sentences_joins_wrapped_lines() {
        let normalizer = Normalizer::default();

        let sentences = normalizer.split_sentences("Jag gick\ntill skolan igår.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "Jag gick\ntill skolan igår.");

        let sentences = normalizer.split_sentences("Jag heter\nvad?\n\nDu bor\r\nhär");
        assert_eq!(
            sentences,
            vec![
                Sentence { text: "Jag heter\nvad?", punctuation: "?" },
                Sentence { text: "Du bor\r\nhär", punctuation: "" },
            ]
        );
    }

    #[test]
    fn test_split_sentences_keeps_punctuation_run() {
        let sentences = Normalizer::default().split_sentences("Du heter Anna?! Ja...");
        assert_eq!(sentences[0].punctuation, "?!");
        assert!(sentences[0].ends_with_question_mark());
        assert_eq!(sentences[1].punctuation, "...");
        assert!(!sentences[1].ends_with_question_mark());
    }

    #[test]
    fn test_clause_punctuation_is_stripped_but_recorded() {
        let tokens = Normalizer::default().tokenize("idag, skolan; hem:");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["idag", "skolan", "hem"]);
        assert!(tokens[0].has_comma());
        assert!(!tokens[1].has_comma());
        assert_eq!(tokens[2].punctuation, vec![':']);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(Normalizer::default().split_sentences("  \n\n ").is_empty());
    }
}
