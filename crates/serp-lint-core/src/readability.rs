//! Readability scoring.
//!
//! Seven boolean checks over a product description's HTML, aggregated into
//! a [`ScoreReport`]. Passive voice is flagged by an auxiliary-verb +
//! past-participle heuristic regex; the heuristic trades precision for
//! simplicity and never inspects grammar beyond adjacent words.

use std::sync::LazyLock;

use regex::Regex;

use crate::html;
use crate::report::{CheckResult, ScoreReport};
use crate::text;
use crate::word_lists;

/// Maximum share of passive sentences, in percent.
const PASSIVE_MAX_PERCENT: f64 = 10.0;

/// Maximum paragraph length, in words.
const PARAGRAPH_MAX_WORDS: usize = 150;

/// A sentence longer than this many words counts as long.
const LONG_SENTENCE_WORDS: usize = 20;

/// Maximum share of long sentences, in percent.
const LONG_SENTENCE_MAX_PERCENT: f64 = 25.0;

/// Descriptions shorter than this many words don't need subheadings.
const SUBHEADING_EXEMPT_WORDS: usize = 300;

/// Minimum share of sentences with a transition word, in percent.
const TRANSITION_MIN_PERCENT: f64 = 30.0;

/// Minimum words before vocabulary can be judged at all.
const MIN_COMPLEXITY_WORDS: usize = 50;

/// Heuristic for passive constructions: auxiliary verb followed by a word
/// shaped like a past participle.
static PASSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(am|is|are|was|were|be|been|being)\s+([a-z]+ed|[a-z]+(?:en|wn|t))\b")
        .expect("valid regex")
});

/// Score a product description's readability.
///
/// Returns exactly seven checks in fixed rule order. Empty input degrades
/// into failing checks, never an error.
#[tracing::instrument(skip_all, fields(html_len = description_html.len()))]
pub fn score_readability(description_html: &str) -> ScoreReport {
    let plain = html::strip_tags(description_html);
    let sentences = text::split_sentences(&plain);
    let words = text::count_words(&plain);

    let checks = vec![
        check_passive_voice(&sentences),
        check_paragraph_length(description_html),
        check_sentence_length(&sentences),
        check_consecutive_sentences(&sentences),
        check_subheading_distribution(description_html, words),
        check_transition_words(&sentences),
        check_word_complexity(words),
    ];

    ScoreReport::from_checks(checks)
}

fn check_passive_voice(sentences: &[String]) -> CheckResult {
    const ID: &str = "passive-voice";
    const LABEL: &str = "Passive voice";

    let rate = percent_of(sentences, |s| PASSIVE.is_match(s));
    if rate < PASSIVE_MAX_PERCENT {
        CheckResult::new(
            ID,
            LABEL,
            true,
            format!("{rate:.1}% of sentences are in passive voice."),
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!(
                "{rate:.1}% of sentences are in passive voice; aim for under {PASSIVE_MAX_PERCENT:.0}%."
            ),
        )
    }
}

fn check_paragraph_length(description_html: &str) -> CheckResult {
    const ID: &str = "paragraph-length";
    const LABEL: &str = "Paragraph length";

    let over = html::split_paragraphs(description_html)
        .iter()
        .filter(|p| text::count_words(p) > PARAGRAPH_MAX_WORDS)
        .count();
    if over == 0 {
        CheckResult::new(
            ID,
            LABEL,
            true,
            format!("No paragraph exceeds {PARAGRAPH_MAX_WORDS} words."),
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!("{over} paragraph(s) exceed {PARAGRAPH_MAX_WORDS} words."),
        )
    }
}

fn check_sentence_length(sentences: &[String]) -> CheckResult {
    const ID: &str = "sentence-length";
    const LABEL: &str = "Sentence length";

    let rate = percent_of(sentences, |s| text::count_words(s) > LONG_SENTENCE_WORDS);
    if rate < LONG_SENTENCE_MAX_PERCENT {
        CheckResult::new(
            ID,
            LABEL,
            true,
            format!("{rate:.1}% of sentences exceed {LONG_SENTENCE_WORDS} words."),
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!(
                "{rate:.1}% of sentences exceed {LONG_SENTENCE_WORDS} words; keep that under {LONG_SENTENCE_MAX_PERCENT:.0}%."
            ),
        )
    }
}

fn check_consecutive_sentences(sentences: &[String]) -> CheckResult {
    const ID: &str = "consecutive-sentences";
    const LABEL: &str = "Consecutive sentences";

    let openers: Vec<Option<String>> = sentences.iter().map(|s| text::leading_word(s)).collect();
    let repeats = openers
        .windows(2)
        .filter(|pair| match pair {
            [Some(a), Some(b)] => a == b,
            _ => false,
        })
        .count();

    if repeats == 0 {
        CheckResult::new(ID, LABEL, true, "No consecutive sentences start with the same word.")
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!("{repeats} pair(s) of consecutive sentences start with the same word."),
        )
    }
}

fn check_subheading_distribution(description_html: &str, words: usize) -> CheckResult {
    const ID: &str = "subheading-distribution";
    const LABEL: &str = "Subheading distribution";

    if !html::subheadings(description_html).is_empty() {
        CheckResult::new(ID, LABEL, true, "The description uses subheadings.")
    } else if words < SUBHEADING_EXEMPT_WORDS {
        CheckResult::new(
            ID,
            LABEL,
            true,
            "Short description; subheadings are not required.",
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            "Add H2 or H3 subheadings to long descriptions.",
        )
    }
}

fn check_transition_words(sentences: &[String]) -> CheckResult {
    const ID: &str = "transition-words";
    const LABEL: &str = "Transition words";

    let rate = percent_of(sentences, |s| word_lists::has_transition(s));
    if rate >= TRANSITION_MIN_PERCENT {
        CheckResult::new(
            ID,
            LABEL,
            true,
            format!("{rate:.1}% of sentences contain a transition word."),
        )
    } else {
        CheckResult::new(
            ID,
            LABEL,
            false,
            format!(
                "{rate:.1}% of sentences contain a transition word; aim for at least {TRANSITION_MIN_PERCENT:.0}%."
            ),
        )
    }
}

fn check_word_complexity(words: usize) -> CheckResult {
    const ID: &str = "word-complexity";
    const LABEL: &str = "Word complexity";

    if words > MIN_COMPLEXITY_WORDS {
        CheckResult::new(ID, LABEL, true, "The description is long enough to judge vocabulary.")
    } else {
        CheckResult::new(ID, LABEL, false, "The description is too short to judge vocabulary.")
    }
}

/// Percentage of sentences matching a predicate; 0 for no sentences.
fn percent_of(sentences: &[String], pred: impl Fn(&str) -> bool) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let hits = sentences.iter().filter(|s| pred(s.as_str())).count();
    (hits as f64 / sentences.len() as f64) * 100.0
}
