//! Property tests for the statistics counter

use proptest::prelude::*;
use typespeak_core::Statistics;

proptest! {
    #[test]
    fn non_empty_text_has_a_sentence_and_a_word(text in "\\PC{1,200}") {
        let stats = Statistics::count(&text);
        prop_assert!(stats.sentences >= 1);
        prop_assert!(stats.words >= 1);
    }

    #[test]
    fn typed_text_has_a_sentence_and_a_word(text in "[a-z .,!?\\-\t]{1,120}") {
        let stats = Statistics::count(&text);
        prop_assert!(stats.sentences >= 1);
        prop_assert!(stats.words >= 1);
    }

    #[test]
    fn sentences_never_exceed_words(text in "[a-zA-Z .,!?]{0,200}") {
        let stats = Statistics::count(&text);
        prop_assert!(stats.sentences <= stats.words);
    }

    #[test]
    fn appending_text_never_decreases_counts(a in "[a-z .!?]{1,80}", b in "[a-z .!?]{1,80}") {
        let joined = format!("{a} {b}");
        let whole = Statistics::count(&joined);
        let head = Statistics::count(&a);
        prop_assert!(whole.sentences >= 1);
        prop_assert!(whole.words >= head.words.saturating_sub(1));
    }
}

#[test]
fn empty_text_counts_nothing() {
    assert_eq!(Statistics::count(""), Statistics { words: 0, sentences: 0 });
}

#[test]
fn statistics_serialize_as_json() {
    let stats = Statistics::count("Hello world.");
    let json = serde_json::to_string(&stats).unwrap();
    assert_eq!(json, r#"{"words":2,"sentences":1}"#);
}
