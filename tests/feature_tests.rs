use proseforge::features::{
    avg_sentence_length, punctuation_ratio, repetition_score, sentence_length_variance,
    type_token_ratio,
};
use proseforge::segmenter::{split_sentences, tokenize, word_tokens};
use rstest::rstest;

fn words(text: &str) -> Vec<String> {
    word_tokens(&tokenize(text))
}

// --- TYPE-TOKEN RATIO ---
#[rstest]
#[case("alpha beta gamma delta", 1.0)]
#[case("echo echo", 0.5)]
#[case("echo echo echo echo", 0.25)]
#[case("Echo ECHO echo", 1.0 / 3.0)] // case-folded
#[case("a, a! a?", 1.0 / 3.0)] // punctuation excluded
fn test_type_token_ratio(#[case] text: &str, #[case] expected: f64) {
    let ttr = type_token_ratio(&words(text));
    assert!(
        (ttr - expected).abs() < 1e-12,
        "TTR for {:?}: got {}, expected {}",
        text,
        ttr,
        expected
    );
}

// --- SENTENCE LENGTH ---
#[rstest]
#[case("One two three. Four five six. Seven eight nine.", 3.0, 0.0)]
#[case("One. Two three four five six seven eight!", 4.0, 9.0)]
#[case("Line one here\nline two\n\nthree", 2.0, 2.0 / 3.0)]
#[case("Just one sentence without a stop", 6.0, 0.0)]
fn test_sentence_length_stats(
    #[case] text: &str,
    #[case] expected_avg: f64,
    #[case] expected_var: f64,
) {
    let sentences = split_sentences(text);
    let avg = avg_sentence_length(&sentences);
    let var = sentence_length_variance(&sentences);
    assert!((avg - expected_avg).abs() < 1e-12, "avg for {:?}: {}", text, avg);
    assert!((var - expected_var).abs() < 1e-12, "var for {:?}: {}", text, var);
}

#[test]
fn test_equal_length_sentences_have_zero_variance() {
    let sentences = ["a b c", "d e f", "g h i", "j k l"];
    assert_eq!(sentence_length_variance(&sentences), 0.0);
}

// --- PUNCTUATION ---
#[rstest]
#[case("", 0.0)]
#[case("abcd", 0.0)]
#[case("a.b,", 0.5)]
#[case("()[]{}", 1.0)]
#[case("\"hi\" 'yo'", 4.0 / 9.0)]
#[case("x: y; z!", 3.0 / 8.0)]
#[case("wait - what…", 0.0)] // dash and ellipsis are not counted
fn test_punctuation_ratio(#[case] text: &str, #[case] expected: f64) {
    assert!((punctuation_ratio(text) - expected).abs() < 1e-12);
}

// --- REPETITION ---
#[test]
fn test_no_repeated_trigrams() {
    let w = words("the quick brown fox jumps over the lazy dog");
    assert_eq!(repetition_score(&w, 3), 0.0);
}

#[test]
fn test_phrase_repeated_five_times() {
    let w = words("go home now go home now go home now go home now go home now");
    assert_eq!(w.len(), 15);
    let rep = repetition_score(&w, 3);
    assert!(rep > 0.0);
    // 13 overlapping trigrams, all belonging to repeated groups
    assert_eq!(rep, 1.0);
}

#[test]
fn test_partial_repetition() {
    // trigrams: [a b c] x2, [b c d], [c d a], [d a b] => 2 of 5 repeated
    let w = words("a b c d a b c");
    assert!((repetition_score(&w, 3) - 2.0 / 5.0).abs() < 1e-12);
}

#[test]
fn test_repetition_ignores_punctuation_between_words() {
    let plain = words("one two three one two three");
    let punctuated = words("one, two; three. One two three!");
    assert_eq!(repetition_score(&plain, 3), repetition_score(&punctuated, 3));
}

#[rstest]
#[case(1, "a a b", 2.0 / 3.0)]
#[case(2, "a b a b", 2.0 / 3.0)]
#[case(4, "a b c", 0.0)]
fn test_repetition_window_sizes(#[case] n: usize, #[case] text: &str, #[case] expected: f64) {
    assert!((repetition_score(&words(text), n) - expected).abs() < 1e-12);
}
