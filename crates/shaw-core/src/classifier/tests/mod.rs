mod explain;

use std::sync::Arc;

use crate::classifier::{AnnotatedToken, Transliterator};
use crate::fallback::Resolver;
use crate::lexicon::{LexiconEntry, LexiconStore};

fn test_lexicon() -> LexiconStore {
    let words: &[(&str, &[(&str, &str)])] = &[
        ("a", &[("0", "𐑩")]),
        ("bbc", &[("NNP", "⸰𐑚𐑰𐑚𐑰𐑕𐑰")]),
        ("boat", &[("0", "𐑚𐑴𐑑")]),
        ("bush", &[("VB", "𐑚𐑫𐑖"), ("NN", "𐑚𐑫𐑖")]),
        ("cat", &[("0", "𐑒𐑨𐑑")]),
        ("do", &[("0", "𐑛𐑵")]),
        ("dog", &[("0", "𐑛𐑪𐑜")]),
        ("friend", &[("0", "𐑓𐑮𐑧𐑯𐑛")]),
        ("go", &[("0", "𐑜𐑴")]),
        ("has", &[("0", "𐑣𐑨𐑟")]),
        ("have", &[("0", "𐑣𐑨𐑝")]),
        ("i", &[("0", "𐑲")]),
        ("john", &[("0", "𐑡𐑪𐑯")]),
        ("kiss", &[("0", "𐑒𐑦𐑕")]),
        ("london", &[("NNP", "𐑤𐑳𐑯𐑛𐑩𐑯")]),
        ("playful", &[("0", "𐑐𐑤𐑱𐑓𐑩𐑤")]),
        (
            "read",
            &[("VBD", "𐑮𐑧𐑛"), ("VBN", "𐑮𐑧𐑛"), ("VB", "𐑮𐑰𐑛"), ("VBP", "𐑮𐑰𐑛")],
        ),
        ("replay", &[("0", "𐑮𐑦𐑐𐑤𐑱")]),
        ("the", &[("0", "𐑞")]),
        ("to", &[("0", "𐑑")]),
        ("used", &[("0", "𐑿𐑟𐑛")]),
        ("we", &[("0", "𐑢𐑰")]),
    ];
    LexiconStore::from_entries(words.iter().map(|(word, entries)| {
        (
            word.to_string(),
            entries
                .iter()
                .map(|(tag, script)| LexiconEntry::new(*tag, *script))
                .collect(),
        )
    }))
}

fn engine() -> Transliterator {
    Transliterator::new(Arc::new(test_lexicon()), Resolver::spelling_only())
}

fn tok(text: &str, tag: &str, whitespace: &str) -> AnnotatedToken {
    AnnotatedToken::new(text, tag, whitespace)
}

/// Convert a sentence given as (text, tag, whitespace) triples.
fn render(tokens: &[(&str, &str, &str)]) -> String {
    let tokens: Vec<AnnotatedToken> = tokens
        .iter()
        .enumerate()
        .map(|(i, (text, tag, ws))| tok(text, tag, ws).at(i))
        .collect();
    engine().convert_sentence(&tokens)
}

/// Render a single token in an otherwise empty sentence.
fn render_one(token: AnnotatedToken) -> String {
    engine().convert_sentence(&[token])
}
