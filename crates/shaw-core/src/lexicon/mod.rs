//! Word → renderings storage.
//!
//! `LexiconStore` holds the immutable ReadLex-derived word list, loaded once at
//! startup from JSON or from a compiled `SHLX` file. `UserLexicon` carries
//! runtime custom spellings and `CompositeLexicon` layers the two.
//! `PhraseList` holds the multi-word phrases handed to the external tokenizer.

mod composite;
mod entry;
mod phrases;
mod store;
mod store_io;
#[cfg(test)]
mod tests;
mod user;

pub use composite::CompositeLexicon;
pub use entry::{select_entry, LexiconEntry, TagMatch, SINGLE_PRONUNCIATION};
pub use phrases::PhraseList;
pub use store::LexiconStore;
pub use user::UserLexicon;

use std::io;

/// Error type for lexicon, phrase list and user lexicon I/O.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected {0})")]
    InvalidMagic(&'static str),

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lexicon is empty")]
    Empty,
}

pub struct SearchResult {
    pub word: String,
    pub entries: Vec<LexiconEntry>,
}

pub trait Lexicon: Send + Sync {
    /// Entries for an exact lowercase word, in priority order. Empty when absent.
    fn lookup(&self, word: &str) -> Vec<LexiconEntry>;

    /// Words starting with `prefix`, sorted, at most `max_results`.
    fn predict(&self, prefix: &str, max_results: usize) -> Vec<SearchResult>;

    fn contains(&self, word: &str) -> bool {
        !self.lookup(word).is_empty()
    }

    /// First listed entry for `word`, the rendering used when a word is
    /// reached through affix stripping rather than a direct hit.
    fn first(&self, word: &str) -> Option<LexiconEntry> {
        self.lookup(word).into_iter().next()
    }
}
