use super::token::Token;
use crate::rules::FilterIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Time,
    Location,
    Other,
}

fn bucket(lower: &str, index: &FilterIndex) -> Bucket {
    if index.is_time(lower) {
        Bucket::Time
    } else if index.is_location(lower) {
        Bucket::Location
    } else {
        Bucket::Other
    }
}

/// Stable partition into time ++ location ++ rest.
fn partition<T: Clone>(items: &[T], lower: impl Fn(&T) -> String, index: &FilterIndex) -> Vec<T> {
    let mut time = Vec::new();
    let mut location = Vec::new();
    let mut other = Vec::new();

    for item in items {
        match bucket(&lower(item), index) {
            Bucket::Time => time.push(item.clone()),
            Bucket::Location => location.push(item.clone()),
            Bucket::Other => other.push(item.clone()),
        }
    }

    time.extend(location);
    time.extend(other);
    time
}

/// Sign order: time words first, then location words, then everything
/// else, each group in its original relative order. Without rules this is
/// the identity.
pub fn reorder_tokens(tokens: &[Token], index: Option<&FilterIndex>) -> Vec<Token> {
    match index {
        Some(index) => partition(tokens, |t| t.lower.clone(), index),
        None => tokens.to_vec(),
    }
}

/// `reorder_tokens` over plain words.
pub fn reorder_words(words: &[&str], index: Option<&FilterIndex>) -> Vec<String> {
    let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    match index {
        Some(index) => partition(&words, |w| w.to_lowercase(), index),
        None => words,
    }
}
