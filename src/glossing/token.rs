use serde::Serialize;
use std::fmt;

/// One word of input after normalization.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    /// Original word with trailing punctuation removed, casing kept
    pub text: String,
    /// Lowercase form used for every rule lookup
    pub lower: String,
    /// Number or lemma replacement, else `text` in uppercase
    pub gloss: String,
    /// Trailing punctuation characters stripped from the word (e.g. ['?'] for "du?")
    pub punctuation: Vec<char>,
    /// Render a comma after the gloss. Only set by sentence glossing, which
    /// carries commas off dropped words.
    pub comma_after: bool,
}

impl Token {
    pub fn has_comma(&self) -> bool {
        self.punctuation.contains(&',')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.gloss)
    }
}
