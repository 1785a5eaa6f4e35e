// Built-in Swedish tables for the static-table profile.

use crate::rules::FilterIndex;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const QUESTION_WORDS: &[&str] = &[
    "vad", "hur", "vem", "var", "när", "varför", "vilken", "vilket", "vilka",
];

pub const NEGATION_WORDS: &[&str] = &["inte", "aldrig", "ej"];

pub const STOPWORDS: &[&str] = &[
    "att", "och", "en", "ett", "den", "det", "som", "på", "i", "av", "till", "för", "med", "om",
    "från",
];

lazy_static! {
    static ref LEMMAS: HashMap<&'static str, &'static str> = HashMap::from([
        ("heter", "HETA"),
        ("är", "VARA"),
        ("gick", "GÅ"),
        ("barnen", "BARN"),
        ("vill", "VILL"),
        ("ska", "SKA"),
        ("har", "HA"),
        ("gjorde", "GÖRA"),
        ("kommer", "KOMMA"),
        ("mår", "MÅ"),
        ("bor", "BO"),
        ("åker", "ÅKA"),
        ("säger", "SÄGA"),
        ("finns", "FINNAS"),
    ]);

    static ref NUMBERS: HashMap<&'static str, &'static str> = HashMap::from([
        ("ett", "1"),
        ("två", "2"),
        ("tre", "3"),
        ("fyra", "4"),
        ("fem", "5"),
        ("sex", "6"),
        ("sju", "7"),
        ("åtta", "8"),
        ("nio", "9"),
        ("tio", "10"),
    ]);

    /// Filter lookup used by the static-table profile
    pub static ref STATIC_INDEX: FilterIndex = 
        FilterIndex::from_lists(STOPWORDS, QUESTION_WORDS).with_negations(NEGATION_WORDS);
}

/// Spelled-out digit 1-10 → numeral. Expects a lowercase word.
pub fn number_for(lower: &str) -> Option<&'static str> {
    NUMBERS.get(lower).copied()
}

/// Inflected form → canonical gloss. Expects a lowercase word.
pub fn lemma_for(lower: &str) -> Option<&'static str> {
    LEMMAS.get(lower).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_table_covers_one_to_ten() {
        let words = ["ett", "två", "tre", "fyra", "fem", "sex", "sju", "åtta", "nio", "tio"];
        for (i, word) in words.iter().enumerate() {
            assert_eq!(number_for(word), Some((i + 1).to_string().as_str()));
        }
        assert_eq!(number_for("elva"), None);
    }

    #[test]
    fn test_lemma_lookup_miss_is_none() {
        assert_eq!(lemma_for("heter"), Some("HETA"));
        assert_eq!(lemma_for("barnen"), Some("BARN"));
        assert_eq!(lemma_for("du"), None);
    }

    #[test]
    fn test_question_words_are_not_stopwords() {
        for word in QUESTION_WORDS {
            assert!(!STOPWORDS.contains(word), "{word} is listed as both");
        }
        assert!(STATIC_INDEX.is_question("när"));
    }

    #[test]
    fn test_static_index() {
        assert!(STATIC_INDEX.is_disposable("och"));
        assert!(STATIC_INDEX.is_question("varför"));
        assert!(!STATIC_INDEX.is_context("idag"));
        assert!(STATIC_INDEX.is_negation("aldrig"));
        assert!(!STATIC_INDEX.is_disposable("inte"));
    }
}
