//! Custom spellings added at runtime.
//!
//! Kept in a `BTreeMap` so listing and prefix prediction come out sorted
//! without extra work. The map sits behind a `RwLock`: spellings can be
//! added while a `Transliterator` holds the lexicon through an `Arc`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use super::store_io::{frame, unframe};
use super::{Lexicon, LexiconEntry, LexiconError, SearchResult, SINGLE_PRONUNCIATION};

const MAGIC: &[u8; 4] = b"SHUL";
const VERSION: u8 = 1;

/// One persisted spelling.
#[derive(Serialize, Deserialize)]
struct SpellingRecord {
    word: String,
    tag: String,
    script: String,
}

#[derive(Default)]
pub struct UserLexicon {
    words: RwLock<BTreeMap<String, Vec<LexiconEntry>>>,
}

impl UserLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Vec<LexiconEntry>>> {
        self.words.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Vec<LexiconEntry>>> {
        self.words.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a spelling; `tag` of `None` makes it apply to every POS tag.
    ///
    /// Returns `false` when the word already has this exact tag and script.
    pub fn register(&self, word: &str, tag: Option<&str>, script: &str) -> bool {
        let entry = LexiconEntry::new(tag.unwrap_or(SINGLE_PRONUNCIATION), script);
        let mut words = self.write();
        let entries = words.entry(word.to_lowercase()).or_default();
        if entries.contains(&entry) {
            false
        } else {
            entries.push(entry);
            true
        }
    }

    /// Drop every entry of `word` spelled `script`, whatever its tag.
    pub fn unregister(&self, word: &str, script: &str) -> bool {
        let key = word.to_lowercase();
        let mut words = self.write();
        let Some(entries) = words.get_mut(&key) else {
            return false;
        };
        let count = entries.len();
        entries.retain(|e| e.script != script);
        let changed = entries.len() != count;
        if entries.is_empty() {
            words.remove(&key);
        }
        changed
    }

    /// Every `(word, entry)` pair, words in order, entries in registration order.
    pub fn list(&self) -> Vec<(String, LexiconEntry)> {
        self.read()
            .iter()
            .flat_map(|(word, entries)| entries.iter().map(move |e| (word.clone(), e.clone())))
            .collect()
    }

    /// `SHUL` header followed by a bincode list of records.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LexiconError> {
        let records: Vec<SpellingRecord> = self
            .list()
            .into_iter()
            .map(|(word, entry)| SpellingRecord {
                word,
                tag: entry.tag,
                script: entry.script,
            })
            .collect();
        let body = bincode::serialize(&records).map_err(LexiconError::Serialize)?;
        Ok(frame(MAGIC, VERSION, &body))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        let body = unframe(MAGIC, VERSION, bytes)?;
        let records: Vec<SpellingRecord> =
            bincode::deserialize(body).map_err(LexiconError::Deserialize)?;
        let mut words: BTreeMap<String, Vec<LexiconEntry>> = BTreeMap::new();
        for SpellingRecord { word, tag, script } in records {
            words
                .entry(word)
                .or_default()
                .push(LexiconEntry::new(tag, script));
        }
        Ok(Self {
            words: RwLock::new(words),
        })
    }

    /// Write next to `path` and rename into place, so a crash never leaves a
    /// truncated file behind.
    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        let bytes = self.to_bytes()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let staging = path.with_extension("shul.part");
        fs::write(&staging, bytes)?;
        fs::rename(&staging, path)?;
        Ok(())
    }

    /// Load from `path`. A missing file is an empty lexicon.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Lexicon for UserLexicon {
    fn lookup(&self, word: &str) -> Vec<LexiconEntry> {
        self.read().get(word).cloned().unwrap_or_default()
    }

    fn predict(&self, prefix: &str, max_results: usize) -> Vec<SearchResult> {
        self.read()
            .range(prefix.to_string()..)
            .take_while(|(word, _)| word.starts_with(prefix))
            .take(max_results)
            .map(|(word, entries)| SearchResult {
                word: word.clone(),
                entries: entries.clone(),
            })
            .collect()
    }
}
