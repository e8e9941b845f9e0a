//! Analyzer behavior at the public API boundary.

use shortlist::{is_stop_word, Analyzer};

#[test]
fn english_pipeline_order_matters() {
    // Stop words are removed before stemming, so "was" never reaches the
    // stemmer while "running" and "swimming" do.
    let tokens = Analyzer::English.normalize("He was running and swimming");
    assert_eq!(tokens, vec!["run", "swim"]);
}

#[test]
fn english_collapses_morphological_variants() {
    let a = Analyzer::English.normalize("engineering scalable systems");
    let b = Analyzer::English.normalize("engineered a scalable system");
    assert_eq!(a, b);
}

#[test]
fn plain_mode_is_split_and_lowercase_only() {
    let tokens = Analyzer::Plain.normalize("The Engineering TEAM");
    assert_eq!(tokens, vec!["the", "engineering", "team"]);
}

#[test]
fn numbers_and_identifiers_survive() {
    let tokens = Analyzer::Plain.normalize("kubernetes 1.29 and tf_serving");
    assert_eq!(tokens, vec!["kubernetes", "1", "29", "and", "tf_serving"]);
}

#[test]
fn unicode_input_does_not_panic() {
    let tokens = Analyzer::English.normalize("café résumé — 東京");
    assert!(!tokens.is_empty());
}

#[test]
fn stop_word_membership() {
    for word in ["the", "is", "at", "with", "of"] {
        assert!(is_stop_word(word), "'{}' should be a stop word", word);
    }
    for word in ["python", "engineer", "kubernetes"] {
        assert!(!is_stop_word(word), "'{}' should not be a stop word", word);
    }
}

#[test]
fn punctuation_only_input_is_empty() {
    assert!(Analyzer::English.normalize("!!! ... ???").is_empty());
    assert!(Analyzer::Plain.normalize("!!! ... ???").is_empty());
}
