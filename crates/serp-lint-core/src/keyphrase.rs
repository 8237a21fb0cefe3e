//! Keyphrase parsing and matching.
//!
//! Catalog exports carry keywords as one comma-separated string; splitting
//! happens once here, at the boundary, so the scorers only ever see a
//! normalized list. All matching is case-insensitive, and user-supplied
//! phrases are escaped before they reach the regex engine so punctuation
//! like `(`, `)`, `*`, or `+` can never break a search.

use regex::Regex;

/// Split a comma-separated keyword string into trimmed, non-empty phrases.
///
/// The first phrase is the primary keyphrase, the second (if any) the
/// secondary.
pub fn parse_list(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|kp| !kp.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring test.
pub fn contains(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&phrase.to_lowercase())
}

/// Count case-insensitive occurrences of a phrase in text.
pub fn count_occurrences(phrase: &str, text: &str) -> usize {
    let Some(pattern) = phrase_pattern(phrase) else {
        return 0;
    };
    pattern.find_iter(text).count()
}

/// Percentage of `word_count` words that are occurrences of `phrase`.
pub fn density(phrase: &str, text: &str, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    (count_occurrences(phrase, text) as f64 / word_count as f64) * 100.0
}

/// Build a case-insensitive search pattern for a phrase.
///
/// The phrase is escaped first, so construction cannot fail on any input;
/// `None` only for the empty phrase.
fn phrase_pattern(phrase: &str) -> Option<Regex> {
    if phrase.is_empty() {
        return None;
    }
    let escaped = regex::escape(phrase);
    Some(Regex::new(&format!("(?i){escaped}")).expect("escaped pattern is a valid regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_splits_and_trims() {
        let phrases = parse_list("inspiring stories, short fiction , ");
        assert_eq!(phrases, vec!["inspiring stories", "short fiction"]);
    }

    #[test]
    fn parse_list_empty_input() {
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ,").is_empty());
    }

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains("Learning JAVA the hard way", "java"));
        assert!(contains("learning java", "Java"));
        assert!(!contains("learning rust", "java"));
        assert!(!contains("anything", ""));
    }

    #[test]
    fn count_occurrences_case_insensitive() {
        assert_eq!(count_occurrences("java", "Java is java. JAVA!"), 3);
        assert_eq!(count_occurrences("java", "rust only"), 0);
        assert_eq!(count_occurrences("", "anything"), 0);
    }

    #[test]
    fn metacharacters_never_panic() {
        // A phrase full of regex metacharacters must match literally.
        let phrase = "C++ (intro)";
        assert_eq!(count_occurrences(phrase, "Learn C++ (intro) today"), 1);
        assert_eq!(count_occurrences("a.b*c", "plain text"), 0);
    }

    #[test]
    fn density_is_occurrences_over_words() {
        let text = "java java and more text here";
        let words = 6;
        let d = density("java", text, words);
        assert!((d - 33.333).abs() < 0.01);
    }

    #[test]
    fn density_with_zero_words() {
        assert_eq!(density("java", "", 0), 0.0);
    }
}
