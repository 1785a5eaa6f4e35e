use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "https://teckensprakslexikon.su.se";

lazy_static! {
    /// Words whose video slug does not follow the normal rules
    static ref SPECIAL_CASES: HashMap<&'static str, &'static str> =
        HashMap::from([("andraspråk", "l2")]);

    static ref SEPARATOR: Regex = Regex::new(r"\s*[-\s]\s*").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9-]").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-+").unwrap();
}

/// URL slug for a lexicon word.
///
/// Lowercase, fold å/ä to a and ö to o, turn whitespace/hyphen runs into a
/// single hyphen, drop everything outside `[a-z0-9-]`, trim hyphens.
pub fn slugify(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some(special) = SPECIAL_CASES.get(lower.as_str()) {
        return special.to_string();
    }

    let folded: String = lower
        .chars()
        .map(|c| match c {
            'å' | 'ä' => 'a',
            'ö' => 'o',
            other => other,
        })
        .collect();

    let slug = SEPARATOR.replace_all(&folded, "-");
    let slug = DISALLOWED.replace_all(&slug, "");
    let slug = HYPHEN_RUN.replace_all(&slug, "-");
    slug.trim_matches('-').to_string()
}

/// Video URL for a lexicon entry: `{base}/movies/{id[..2]}/180x180/{slug}-{id}-tecken.mp4`
pub fn video_url(base_url: &str, word: &str, id: &str) -> String {
    let folder: String = id.chars().take(2).collect();
    format!(
        "{}/movies/{}/180x180/{}-{}-tecken.mp4",
        base_url.trim_end_matches('/'),
        folder,
        slugify(word),
        id
    )
}
