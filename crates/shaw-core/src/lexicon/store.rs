use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use super::store_io::MAGIC;
use super::{Lexicon, LexiconEntry, LexiconError, SearchResult};

/// Immutable lexicon: sorted keys with per-key entry lists.
///
/// Entry order inside a key is preserved exactly as given; it decides which
/// pronunciation wins when several entries fit a POS tag equally well.
#[derive(Serialize, Deserialize)]
pub struct LexiconStore {
    pub(super) keys: Vec<String>,
    pub(super) values: Vec<Vec<LexiconEntry>>,
}

impl LexiconStore {
    /// Build from `(word, entries)` pairs. Words with no entries are dropped;
    /// a repeated word keeps its last entry list.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<LexiconEntry>)>) -> Self {
        let map: BTreeMap<String, Vec<LexiconEntry>> = entries
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .collect();
        let (keys, values) = map.into_iter().unzip();
        Self { keys, values }
    }

    /// Parse the ReadLex converter JSON: `{ "word": [ { "tag": .., "Shaw": .. }, .. ], .. }`.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let _span = debug_span!("lexicon_from_json", bytes = json.len()).entered();
        let raw: BTreeMap<String, Vec<LexiconEntry>> = serde_json::from_str(json)?;
        let mut skipped = 0usize;
        let pairs: Vec<(String, Vec<LexiconEntry>)> = raw
            .into_iter()
            .filter(|(word, entries)| {
                if entries.is_empty() {
                    warn!(word = word.as_str(), "skipping word with no entries");
                    skipped += 1;
                    false
                } else {
                    true
                }
            })
            .collect();
        if pairs.is_empty() {
            return Err(LexiconError::Empty);
        }
        let store = Self::from_entries(pairs);
        debug!(words = store.keys.len(), skipped);
        Ok(store)
    }

    /// Load a lexicon file, compiled (`SHLX`) or JSON, detected by magic bytes.
    ///
    /// Compiled files go through [`LexiconStore::open`].
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let mut magic = [0u8; 4];
        let compiled = File::open(path)?.read_exact(&mut magic).is_ok() && &magic == MAGIC;
        if compiled {
            Self::open(path)
        } else {
            Self::from_json(&fs::read_to_string(path)?)
        }
    }

    fn index_of(&self, word: &str) -> Option<usize> {
        self.keys
            .binary_search_by(|k| k.as_str().cmp(word))
            .ok()
    }

    /// Entries for `word` without cloning.
    pub fn get(&self, word: &str) -> Option<&[LexiconEntry]> {
        self.index_of(word).map(|i| self.values[i].as_slice())
    }

    /// Iterate over all `(word, entries)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LexiconEntry])> {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Returns (word_count, entry_count).
    pub fn stats(&self) -> (usize, usize) {
        let words = self.keys.len();
        let entries: usize = self.values.iter().map(|v| v.len()).sum();
        (words, entries)
    }
}

impl Lexicon for LexiconStore {
    fn lookup(&self, word: &str) -> Vec<LexiconEntry> {
        self.get(word).map(<[_]>::to_vec).unwrap_or_default()
    }

    fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    fn first(&self, word: &str) -> Option<LexiconEntry> {
        self.get(word).and_then(|v| v.first().cloned())
    }

    fn predict(&self, prefix: &str, max_results: usize) -> Vec<SearchResult> {
        let start = self.keys.partition_point(|k| k.as_str() < prefix);
        self.keys[start..]
            .iter()
            .zip(&self.values[start..])
            .take_while(|(k, _)| k.starts_with(prefix))
            .take(max_results)
            .map(|(k, v)| SearchResult {
                word: k.clone(),
                entries: v.clone(),
            })
            .collect()
    }
}
