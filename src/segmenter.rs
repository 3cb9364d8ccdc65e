//! Tokenization and sentence splitting.
//!
//! Both splitters are deliberately naive: tokens are Unicode word runs or
//! single punctuation marks, and sentences end at `. ! ? ;` followed by
//! whitespace or at any newline. Abbreviations and decimals are not
//! protected.

use once_cell::sync::Lazy;
use regex::Regex;

// Combining marks are not word characters: a decomposed accent stands
// alone as a symbol token.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w--\p{M}]+|[[^\w\s]\p{M}]").expect("valid token pattern")
});

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w--\p{M}]").expect("valid word pattern"));

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?;]\s+|\n+").expect("valid sentence pattern"));

/// Lowercased word runs and single non-space symbols, in text order.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| !t.trim().is_empty())
        .collect()
}

#[inline]
pub fn is_word_token(token: &str) -> bool {
    WORD_RE.is_match(token)
}

/// Drops punctuation tokens, keeping only word runs.
pub fn word_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| is_word_token(t))
        .cloned()
        .collect()
}

pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK_RE.find_iter(text) {
        // Terminal punctuation stays with the sentence it closes.
        let end = if text[m.start()..].starts_with('\n') {
            m.start()
        } else {
            m.start() + 1
        };
        push_fragment(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        out.push(fragment.to_string());
    }
}

/// Whitespace-delimited word count of a single sentence.
#[inline]
pub fn sentence_word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_words_and_punctuation() {
        let tokens = tokenize("Hello, World! It's 2024.");
        assert_eq!(
            tokens,
            vec!["hello", ",", "world", "!", "it", "'", "s", "2024", "."]
        );
    }

    #[test]
    fn test_tokenize_unicode_words() {
        let tokens = tokenize("Ünïcödé wörds — déjà");
        assert_eq!(tokens, vec!["ünïcödé", "wörds", "—", "déjà"]);
    }

    #[test]
    fn test_tokenize_decomposed_accent_splits_word() {
        let tokens = tokenize("cafe\u{301} ok");
        assert_eq!(tokens, vec!["cafe", "\u{301}", "ok"]);
        assert_eq!(word_tokens(&tokens), vec!["cafe", "ok"]);
        // Precomposed form stays a single word
        assert_eq!(tokenize("caf\u{e9} ok"), vec!["caf\u{e9}", "ok"]);
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        assert!(tokenize(" \n\t  ").is_empty());
    }

    #[test]
    fn test_word_tokens_drop_punctuation() {
        let tokens = tokenize("a, b; c_d!");
        assert_eq!(word_tokens(&tokens), vec!["a", "b", "c_d"]);
    }

    #[test]
    fn test_split_sentences_on_terminal_punctuation() {
        let s = split_sentences("One two. Three four! Five? Six; seven");
        assert_eq!(s, vec!["One two.", "Three four!", "Five?", "Six;", "seven"]);
    }

    #[test]
    fn test_split_sentences_requires_whitespace_after_punctuation() {
        let s = split_sentences("Pi is 3.14 roughly.No break here");
        assert_eq!(s, vec!["Pi is 3.14 roughly.No break here"]);
    }

    #[test]
    fn test_split_sentences_on_newlines() {
        let s = split_sentences("\n  first line\n\n\nsecond line  \n third.\n");
        assert_eq!(s, vec!["first line", "second line", "third."]);
    }

    #[test]
    fn test_split_sentences_abbreviations_are_split() {
        let s = split_sentences("Ask Dr. Smith.");
        assert_eq!(s, vec!["Ask Dr.", "Smith."]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\n ").is_empty());
    }

    #[test]
    fn test_sentence_word_count() {
        assert_eq!(sentence_word_count("  a  b\tc\n"), 3);
        assert_eq!(sentence_word_count(""), 0);
    }
}
