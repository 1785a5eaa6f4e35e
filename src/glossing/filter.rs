use super::token::Token;
use crate::rules::FilterIndex;

/// Keep/discard decision for one lowercase word.
///
/// Context words and interrogatives always survive; disposable words are
/// dropped; anything unknown is kept.
pub fn keep(lower: &str, index: &FilterIndex) -> bool {
    if index.is_context(lower) || index.is_question(lower) {
        return true;
    }
    !index.is_disposable(lower)
}

/// Drop disposable tokens, preserving the order of the rest.
/// Without rules this is the identity.
pub fn filter_tokens(tokens: &[Token], index: Option<&FilterIndex>) -> Vec<Token> {
    match index {
        Some(index) => tokens
            .iter()
            .filter(|token| keep(&token.lower, index))
            .cloned()
            .collect(),
        None => tokens.to_vec(),
    }
}

/// Mark which tokens should render a comma once filtering has run.
///
/// A comma on a word the filter will drop moves to the previous kept word,
/// or to the next kept word when none was kept yet. Returns every token;
/// pass the result to `filter_tokens`.
pub fn carry_commas(tokens: &[Token], index: Option<&FilterIndex>) -> Vec<Token> {
    let mut carried = tokens.to_vec();
    let mut last_kept: Option<usize> = None;
    let mut pending = false;

    for i in 0..carried.len() {
        let has_comma = carried[i].has_comma();
        let kept = index.map_or(true, |index| keep(&carried[i].lower, index));

        if kept {
            carried[i].comma_after = has_comma || pending;
            pending = false;
            last_kept = Some(i);
        } else if has_comma {
            match last_kept {
                Some(k) => carried[k].comma_after = true,
                None => pending = true,
            }
        }
    }

    carried
}

/// `filter_tokens` over plain words, matched case-insensitively.
pub fn filter_words(words: &[&str], index: Option<&FilterIndex>) -> Vec<String> {
    words
        .iter()
        .filter(|word| index.map_or(true, |index| keep(&word.to_lowercase(), index)))
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossing::normalize::Normalizer;
    use crate::rules::model::{ContextWords, FilterRuleSet, IgnoreWords};

    fn index() -> FilterIndex {
        let mut rules = FilterRuleSet {
            ignore_words: IgnoreWords {
                stopwords: vec!["och".into(), "att".into(), "hem".into()],
                articles: vec!["en".into()],
                ..IgnoreWords::default()
            },
            context_words: ContextWords {
                time_words: vec!["idag".into(), "igår".into()],
                location_words: vec!["hem".into()],
                negation_words: vec!["inte".into()],
                quantifiers: vec![],
            },
            ..FilterRuleSet::default()
        };
        rules.priority_words.categories.question_words = vec!["när".into()];
        FilterIndex::new(&rules)
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_context_word_survives_even_if_disposable() {
        let tokens = Normalizer::default().tokenize("idag gick barnen och en hund hem");
        let filtered = filter_tokens(&tokens, Some(&index()));
        assert_eq!(texts(&filtered), vec!["idag", "gick", "barnen", "hund", "hem"]);
    }

    #[test]
    fn test_question_words_survive() {
        let tokens = Normalizer::default().tokenize("När slutar att skolan");
        let filtered = filter_tokens(&tokens, Some(&index()));
        assert_eq!(texts(&filtered), vec!["När", "slutar", "skolan"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_keeps_casing() {
        let tokens = Normalizer::default().tokenize("OCH Inte Idag");
        let filtered = filter_tokens(&tokens, Some(&index()));
        assert_eq!(texts(&filtered), vec!["Inte", "Idag"]);
    }

    #[test]
    fn test_absent_rules_is_identity() {
        let tokens = Normalizer::default().tokenize("och att en");
        assert_eq!(filter_tokens(&tokens, None), tokens);
        assert_eq!(filter_words(&["och", "att"], None), vec!["och", "att"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let index = index();
        let tokens = Normalizer::default().tokenize("igår och att jag en bok inte");
        let once = filter_tokens(&tokens, Some(&index));
        let twice = filter_tokens(&once, Some(&index));
        assert_eq!(once, twice);
    }

    fn commas(tokens: &[Token]) -> Vec<(&str, bool)> {
        tokens.iter().map(|t| (t.text.as_str(), t.comma_after)).collect()
    }

    #[test]
    fn test_carry_commas_keeps_comma_on_kept_word() {
        let tokens = Normalizer::default().tokenize("igår, jag läste");
        let carried = filter_tokens(&carry_commas(&tokens, Some(&index())), Some(&index()));
        assert_eq!(commas(&carried), vec![("igår", true), ("jag", false), ("läste", false)]);
    }

    #[test]
    fn test_carry_commas_moves_to_previous_kept_word() {
        let tokens = Normalizer::default().tokenize("jag läste och, sedan sov jag");
        let carried = filter_tokens(&carry_commas(&tokens, Some(&index())), Some(&index()));
        assert_eq!(
            commas(&carried),
            vec![("jag", false), ("läste", true), ("sedan", false), ("sov", false), ("jag", false)]
        );
    }

    #[test]
    fn test_carry_commas_leading_dropped_word_moves_forward() {
        let tokens = Normalizer::default().tokenize("och, att barnen sov");
        let carried = filter_tokens(&carry_commas(&tokens, Some(&index())), Some(&index()));
        assert_eq!(commas(&carried), vec![("barnen", true), ("sov", false)]);
    }

    #[test]
    fn test_carry_commas_without_rules_marks_in_place() {
        let tokens = Normalizer::default().tokenize("och, att");
        let carried = carry_commas(&tokens, None);
        assert_eq!(commas(&carried), vec![("och", true), ("att", false)]);
    }

    #[test]
    fn test_filter_words() {
        let words = ["Idag", "och", "jag", "EN"];
        assert_eq!(filter_words(&words, Some(&index())), vec!["Idag", "jag"]);
    }
}
