//! Text processing utilities.
//!
//! Provides word counting, sentence splitting, and leading-word extraction
//! for use by the scoring modules. Input here is already plain text; HTML
//! handling lives in [`crate::html`].

/// Minimum fragment length (in characters) to count as a sentence.
///
/// Filters stray punctuation left over from aggressive tag stripping.
const MIN_SENTENCE_CHARS: usize = 3;

/// Count words by whitespace splitting, dropping empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split plain text into sentences.
///
/// A boundary is a `.`, `!`, or `?` followed by whitespace. Fragments of
/// three characters or fewer are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);

        if is_sentence_terminator(ch) && chars.peek().is_some_and(|c| c.is_whitespace()) {
            push_fragment(&mut sentences, &current);
            current.clear();
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        }
    }

    push_fragment(&mut sentences, &current);
    sentences
}

/// The first word of a sentence, stripped of punctuation and lowercased.
///
/// Returns `None` for words shorter than three characters, so short
/// function words never count as a repeated opener.
pub fn leading_word(sentence: &str) -> Option<String> {
    let word = sentence
        .split_whitespace()
        .next()?
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if word.chars().count() < 3 {
        None
    } else {
        Some(word)
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if trimmed.chars().count() > MIN_SENTENCE_CHARS {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence.");
        assert_eq!(sentences[1], "This is another sentence.");
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn stacked_terminators_stay_together() {
        let sentences = split_sentences("Really?! I had no idea.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Really?!");
    }

    #[test]
    fn short_fragments_dropped() {
        let sentences = split_sentences("Hm. This one is long enough to keep.");
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].starts_with("This one"));
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn count_words_basic() {
        assert_eq!(count_words("Hello, world! This is a test."), 6);
        assert_eq!(count_words("   spaced    out   "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn leading_word_strips_punctuation_and_lowercases() {
        assert_eq!(
            leading_word("\"Books are great.\""),
            Some("books".to_string())
        );
        assert_eq!(leading_word("However, it rained."), Some("however".to_string()));
    }

    #[test]
    fn leading_word_ignores_short_words() {
        assert_eq!(leading_word("It was fine."), None);
        assert_eq!(leading_word(""), None);
    }
}
