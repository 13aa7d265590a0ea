//! Keyword frequency extraction.

use crate::score::STOPWORDS;
use regex::Regex;
use std::collections::HashMap;

/// How many keywords a page record carries at most
const MAX_KEYWORDS: usize = 10;

/// Top keyword tokens of the cleaned text by descending frequency.
///
/// Tokens are runs of at least three Latin or accented letters,
/// case-folded, with bilingual stopwords dropped. Frequency ties are
/// broken by first appearance in the text.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let token_pattern =
        Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿ]{3,}").expect("valid token pattern");

    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut position = 0usize;
    for token in token_pattern.find_iter(text) {
        let word = token.as_str().to_lowercase();
        if STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        position += 1;
        let entry = counts.entry(word).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _, _)| word)
        .collect()
}
