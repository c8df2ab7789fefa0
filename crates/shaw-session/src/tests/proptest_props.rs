//! Property-based tests for document conversion.
//!
//! Generates random token sequences and checks determinism and pass-through
//! of non-linguistic tokens.

use proptest::prelude::*;
use shaw_core::classifier::AnnotatedToken;

use super::{make_session, tok};
use crate::Document;

fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(vec![
            "the", "cat", "dog", "do", "n't", "'s", "'", "read", "like", "I", "to", "have",
            "used", "cats", "undog", "doglike", "21st", "1980s",
        ])
        .prop_map(str::to_string),
        2 => "[a-zA-Z]{1,10}",
        1 => "[0-9,.;:!?()\\-]{1,6}",
    ]
}

fn arb_token() -> impl Strategy<Value = AnnotatedToken> {
    (
        arb_word(),
        prop::sample::select(vec!["NN", "NNP", "NNS", "VB", "VBD", "VBP", "POS", "DT", "."]),
        prop::sample::select(vec!["", " ", "\n"]),
        prop::option::of(prop::sample::select(vec!["PERSON", "ORG", "DATE"])),
    )
        .prop_map(|(text, tag, ws, ent)| {
            let t = tok(&text, tag, ws);
            match ent {
                Some(kind) => t.entity(kind),
                None => t,
            }
        })
}

fn arb_sentence() -> impl Strategy<Value = Vec<AnnotatedToken>> {
    prop::collection::vec(arb_token(), 0..16).prop_map(|tokens| {
        tokens
            .into_iter()
            .enumerate()
            .map(|(i, t)| t.at(i))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn conversion_is_deterministic(sentences in prop::collection::vec(arb_sentence(), 0..4)) {
        let doc = Document::new(sentences);
        let warm = make_session();
        let first = warm.convert_document(&doc);
        let second = warm.convert_document(&doc);
        let cold = make_session().convert_document(&doc);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &cold);
    }

    #[test]
    fn punctuation_and_digits_pass_through(
        text in "[0-9,.;:!?()\\-]{1,8}",
        ws in prop::sample::select(vec!["", " "]),
    ) {
        let doc = Document::new(vec![vec![tok(&text, "CD", ws)]]);
        prop_assert_eq!(make_session().convert_document(&doc), format!("{text}{ws}"));
    }

    #[test]
    fn unknown_capitalized_words_are_marked(word in "[A-Z][bcdfgklmnprtvz]{2,6}") {
        let doc = Document::new(vec![vec![tok(&word, "NNP", "")]]);
        let out = make_session().convert_document(&doc);
        prop_assert!(out.starts_with('·'), "{}", out);
        prop_assert!(out.ends_with("[p]"), "{}", out);
    }
}
