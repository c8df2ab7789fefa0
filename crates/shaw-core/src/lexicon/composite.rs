use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Lexicon, LexiconEntry, SearchResult};

/// A lexicon that layers several lexicons.
///
/// Layers are listed lowest priority first. A word's entry list comes whole
/// from the highest-priority layer that has the word: lists are never merged,
/// because the order inside a list decides pronunciation priority.
pub struct CompositeLexicon {
    layers: Vec<Arc<dyn Lexicon>>,
}

impl CompositeLexicon {
    pub fn new(layers: Vec<Arc<dyn Lexicon>>) -> Self {
        Self { layers }
    }
}

impl Lexicon for CompositeLexicon {
    fn lookup(&self, word: &str) -> Vec<LexiconEntry> {
        self.layers
            .iter()
            .rev()
            .map(|layer| layer.lookup(word))
            .find(|entries| !entries.is_empty())
            .unwrap_or_default()
    }

    fn contains(&self, word: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains(word))
    }

    fn predict(&self, prefix: &str, max_results: usize) -> Vec<SearchResult> {
        let mut by_word: BTreeMap<String, Vec<LexiconEntry>> = BTreeMap::new();
        // Lowest priority first so higher layers overwrite.
        for layer in &self.layers {
            for sr in layer.predict(prefix, max_results) {
                by_word.insert(sr.word, sr.entries);
            }
        }
        by_word
            .into_iter()
            .take(max_results)
            .map(|(word, entries)| SearchResult { word, entries })
            .collect()
    }
}
