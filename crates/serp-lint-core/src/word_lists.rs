//! Curated word lists for readability scoring.
//!
//! Transition words and phrases used by the readability scorer's
//! transition-word rule.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Single-word transitions that connect ideas between sentences.
pub static TRANSITION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "however",
        "therefore",
        "thus",
        "consequently",
        "nevertheless",
        "moreover",
        "furthermore",
        "additionally",
        "meanwhile",
        "instead",
        "otherwise",
        "similarly",
        "likewise",
        "conversely",
        "nonetheless",
        "hence",
        "accordingly",
        "subsequently",
        "indeed",
        "specifically",
        "particularly",
        "especially",
        "also",
        "besides",
        "still",
    ]
    .into_iter()
    .collect()
});

/// Multi-word transition phrases.
pub static TRANSITION_PHRASES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "for example",
        "for instance",
        "in addition",
        "in contrast",
        "on the other hand",
        "as a result",
        "in conclusion",
        "in summary",
        "in fact",
        "in other words",
    ]
    .into_iter()
    .collect()
});

/// Does a sentence contain at least one transition word or phrase?
///
/// Single words match whole word tokens; phrases match as substrings.
pub fn has_transition(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();

    let word_hit = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()))
        .any(|w| TRANSITION_WORDS.contains(w));
    if word_hit {
        return true;
    }

    TRANSITION_PHRASES.iter().any(|tp| lower.contains(tp))
}
