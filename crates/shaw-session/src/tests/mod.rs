mod proptest_props;

use std::sync::Arc;

use shaw_core::classifier::{AnnotatedToken, Transliterator};
use shaw_core::fallback::Resolver;
use shaw_core::lexicon::{LexiconEntry, LexiconStore};

use super::Session;

pub(super) fn make_test_lexicon() -> Arc<LexiconStore> {
    let words: &[(&str, &str, &str)] = &[
        ("cat", "0", "𐑒𐑨𐑑"),
        ("dog", "0", "𐑛𐑪𐑜"),
        ("do", "0", "𐑛𐑵"),
        ("i", "0", "𐑲"),
        ("like", "0", "𐑤𐑲𐑒"),
        ("the", "0", "𐑞"),
        ("read", "VBD", "𐑮𐑧𐑛"),
        ("read", "VB", "𐑮𐑰𐑛"),
    ];
    let mut grouped: Vec<(String, Vec<LexiconEntry>)> = Vec::new();
    for &(word, tag, script) in words {
        match grouped.iter_mut().find(|(w, _)| w == word) {
            Some((_, entries)) => entries.push(LexiconEntry::new(tag, script)),
            None => grouped.push((word.to_string(), vec![LexiconEntry::new(tag, script)])),
        }
    }
    Arc::new(LexiconStore::from_entries(grouped))
}

pub(super) fn make_session() -> Session {
    Session::new(Transliterator::new(
        make_test_lexicon(),
        Resolver::spelling_only(),
    ))
}

pub(super) fn tok(text: &str, tag: &str, whitespace: &str) -> AnnotatedToken {
    AnnotatedToken::new(text, tag, whitespace)
}
