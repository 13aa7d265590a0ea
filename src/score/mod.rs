//! Keyword tables and heuristic scoring
//!
//! Every keyword-driven decision the crawler makes lives here as a named
//! constant table plus a pure function over it: the URL-only quality
//! estimate used to reorder the frontier, the anchor-text interest score
//! used to pick outgoing links, the French/English language vote, and the
//! additive content quality score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords in a URL that suggest substantive content
pub const URL_QUALITY_TERMS: &[&str] = &["article", "guide", "tutorial", "about", "detail", "info"];

/// Keywords in a URL that suggest ads, tracking or junk pages
pub const URL_SPAM_TERMS: &[&str] = &["ad", "ads", "popup", "redirect", "track"];

/// Anchor-text keywords that make an outgoing link worth following
pub const INTERESTING_LINK_TERMS: &[&str] = &[
    "detail", "détail", "more", "plus", "article", "guide", "tutorial", "tutoriel", "contact",
    "about", "info", "savoir",
];

/// Anchor-text terms that mark generic site chrome rather than content
pub const GENERIC_NAV_TERMS: &[&str] = &[
    "home",
    "accueil",
    "menu",
    "search",
    "recherche",
    "login",
    "connexion",
];

/// Sentence keywords that mark a sentence as summary-worthy
pub const IMPORTANCE_TERMS: &[&str] = &[
    "important",
    "essentiel",
    "essential",
    "clé",
    "key",
    "principal",
    "main",
    "crucial",
    "significant",
    "notable",
];

/// High-frequency French function words used for the language vote
pub const FRENCH_INDICATORS: &[&str] = &[
    "le", "la", "les", "de", "des", "et", "un", "une", "est", "dans", "pour", "que", "qui",
    "avec", "sur",
];

/// High-frequency English function words used for the language vote
pub const ENGLISH_INDICATORS: &[&str] = &[
    "the", "and", "is", "in", "of", "to", "for", "with", "that", "this", "are", "was", "have",
    "from", "not",
];

/// Bilingual stopword list applied before keyword counting.
///
/// Only words of three letters or more matter here; the tokenizer never
/// emits shorter tokens.
pub const STOPWORDS: &[&str] = &[
    // English
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "has", "have", "was",
    "were", "with", "that", "this", "they", "them", "then", "than", "from", "into", "out",
    "your", "what", "when", "where", "which", "while", "will", "would", "there", "their",
    "been", "being", "more", "most", "some", "such", "only", "other", "also", "its", "about",
    // French
    "les", "des", "une", "est", "dans", "pour", "que", "qui", "avec", "sur", "par", "pas",
    "plus", "son", "ses", "aux", "ces", "comme", "mais", "ont", "été", "elle", "ils", "nous",
    "vous", "leur", "leurs", "tout", "tous", "toute", "toutes", "fait", "deux", "bien",
    "aussi", "être", "avoir", "cette", "sont", "sans", "sous", "entre", "après", "avant",
];

/// Detected page language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scores an unfetched URL string for frontier reordering.
///
/// Cheap by design: the only inputs are the URL's length and the keyword
/// tables. +1.0 for a length strictly between 20 and 100, +0.5 per quality
/// term present, -1.0 per spam term present, floored at 0.0 with no cap.
///
/// Distinct from [`content_quality_score`], which scores fetched content.
pub fn url_quality_estimate(url: &str) -> f64 {
    let mut score: f64 = 0.0;

    let len = url.len();
    if len > 20 && len < 100 {
        score += 1.0;
    }

    let lower = url.to_lowercase();
    for term in URL_QUALITY_TERMS {
        if lower.contains(term) {
            score += 0.5;
        }
    }
    for term in URL_SPAM_TERMS {
        if lower.contains(term) {
            score -= 1.0;
        }
    }

    score.max(0.0)
}

/// Scores an outgoing link by its anchor text.
///
/// Sums occurrences of interesting terms, minus 2 if the text contains a
/// generic navigation term. Only links scoring strictly above zero are
/// worth following.
pub fn link_interest_score(anchor_text: &str) -> i32 {
    let lower = anchor_text.to_lowercase();

    let mut score: i32 = 0;
    for term in INTERESTING_LINK_TERMS {
        score += lower.matches(term).count() as i32;
    }

    if GENERIC_NAV_TERMS.iter().any(|term| lower.contains(term)) {
        score -= 2;
    }

    score
}

/// Majority vote between French and English indicator words.
///
/// Tokens are whitespace-delimited and matched exactly against the
/// indicator tables; strict majority wins, anything else is `Unknown`.
pub fn detect_language(text: &str) -> Language {
    let lower = text.to_lowercase();

    let mut french = 0usize;
    let mut english = 0usize;
    for token in lower.split_whitespace() {
        if FRENCH_INDICATORS.contains(&token) {
            french += 1;
        }
        if ENGLISH_INDICATORS.contains(&token) {
            english += 1;
        }
    }

    if french > english {
        Language::Fr
    } else if english > french {
        Language::En
    } else {
        Language::Unknown
    }
}

/// Additive quality score over extracted content, capped at 10.0.
///
/// Components: text length (+3.0 over 1000 bytes, +2.0 over 500, +1.0 over
/// 100), a usable title (+1.0 when longer than 10 bytes), link count (+2.0
/// over 10 links, +1.0 over 5), text-to-link ratio (+1.0 when above 100
/// bytes per link), and paragraph structure (+1.0 when a blank line is
/// present).
pub fn content_quality_score(text: &str, title: &str, link_count: usize) -> f64 {
    let mut score: f64 = 0.0;
    let len = text.len();

    if len > 1000 {
        score += 3.0;
    } else if len > 500 {
        score += 2.0;
    } else if len > 100 {
        score += 1.0;
    }

    if !title.is_empty() && title.len() > 10 {
        score += 1.0;
    }

    if link_count > 10 {
        score += 2.0;
    } else if link_count > 5 {
        score += 1.0;
    }

    if link_count > 0 && (len as f64 / link_count as f64) > 100.0 {
        score += 1.0;
    }

    if text.contains("\n\n") {
        score += 1.0;
    }

    score.min(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_estimate_length_window() {
        // 21..=99 chars earns the length point
        assert_eq!(url_quality_estimate("https://site.test/a/b/c/d"), 1.0);
        // Too short
        assert_eq!(url_quality_estimate("https://s.t/"), 0.0);
        // Too long
        let long = format!("https://site.test/{}", "x".repeat(120));
        assert_eq!(url_quality_estimate(&long), 0.0);
    }

    #[test]
    fn test_url_estimate_quality_terms() {
        let url = "https://site.test/guide/article-one";
        // length point + guide + article
        assert_eq!(url_quality_estimate(url), 2.0);
    }

    #[test]
    fn test_url_estimate_spam_floor() {
        // "ads" also contains "ad", so both spam terms fire
        let url = "https://site.test/ads/popup";
        assert_eq!(url_quality_estimate(url), 0.0);
    }

    #[test]
    fn test_url_estimate_never_negative() {
        let url = "https://t.co/ads-track-popup-redirect";
        assert!(url_quality_estimate(url) >= 0.0);
    }

    #[test]
    fn test_link_interest_positive() {
        assert!(link_interest_score("Read the full guide") > 0);
        assert!(link_interest_score("More details about pricing") > 0);
    }

    #[test]
    fn test_link_interest_nav_penalty() {
        assert!(link_interest_score("Menu") <= 0);
        assert!(link_interest_score("Back to home") <= 0);
        // Interesting term does not outweigh the penalty on its own
        assert!(link_interest_score("Home guide") <= 0);
    }

    #[test]
    fn test_link_interest_counts_occurrences() {
        let single = link_interest_score("guide");
        let double = link_interest_score("guide guide");
        assert_eq!(double, single * 2);
    }

    #[test]
    fn test_detect_language_french() {
        assert_eq!(detect_language("le chat est dans la maison"), Language::Fr);
    }

    #[test]
    fn test_detect_language_english() {
        assert_eq!(detect_language("the cat is in the house"), Language::En);
    }

    #[test]
    fn test_detect_language_empty_is_unknown() {
        assert_eq!(detect_language(""), Language::Unknown);
        assert_eq!(detect_language("zzz qqq www"), Language::Unknown);
    }

    #[test]
    fn test_quality_score_bounds() {
        // Exhaustive-ish sweep over the component space
        let medium = "x".repeat(200);
        let long = "y".repeat(600);
        let very_long = "z".repeat(2000);
        let texts: [&str; 5] = ["", "short", &medium, &long, &very_long];
        let titles = ["", "tiny", "a title that is long enough"];
        for text in &texts {
            for title in &titles {
                for links in [0usize, 3, 7, 15] {
                    let score = content_quality_score(text, title, links);
                    assert!((0.0..=10.0).contains(&score), "score {} out of bounds", score);
                }
            }
        }
    }

    #[test]
    fn test_quality_score_components() {
        let text = "x".repeat(1500);
        // length 3.0 + title 1.0 + links 2.0 + ratio 1.0 (1500/12 = 125)
        let score = content_quality_score(&text, "A reasonably long title", 12);
        assert_eq!(score, 7.0);
    }

    #[test]
    fn test_quality_score_paragraph_bonus() {
        let flat = "a".repeat(150);
        let structured = format!("{}\n\n{}", "a".repeat(75), "b".repeat(75));
        let without = content_quality_score(&flat, "", 0);
        let with = content_quality_score(&structured, "", 0);
        assert_eq!(with - without, 1.0);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Fr.to_string(), "fr");
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Unknown.to_string(), "unknown");
    }
}
