use std::path::Path;

use custom_elements::is_valid_custom_element_name;
use dom_test_support::name_cases::NameCorpus;

fn corpus() -> NameCorpus {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/names.toml");
    NameCorpus::load(&path)
}

#[test]
fn corpus_valid_names_accepted() {
    let corpus = corpus();
    assert!(!corpus.valid.is_empty(), "corpus should not be empty");
    for name in &corpus.valid {
        assert!(
            is_valid_custom_element_name(name),
            "expected valid: {name:?}"
        );
    }
}

#[test]
fn corpus_invalid_names_rejected() {
    let corpus = corpus();
    assert!(!corpus.invalid.is_empty(), "corpus should not be empty");
    for name in &corpus.invalid {
        assert!(
            !is_valid_custom_element_name(name),
            "expected invalid: {name:?}"
        );
    }
}

#[test]
fn corpus_lists_do_not_overlap() {
    let corpus = corpus();
    for name in &corpus.valid {
        assert!(
            !corpus.invalid.contains(name),
            "{name:?} appears in both lists"
        );
    }
}
