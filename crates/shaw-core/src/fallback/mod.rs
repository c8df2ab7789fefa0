//! Phonetic fallback for words the lexicon does not know.
//!
//! A `Resolver` asks a primary `PhonemeSource` (typically a pronouncing
//! dictionary) and, when that reports failure, a secondary rule-based source.
//! Stress and length marks are stripped from whichever transcription wins.
//! Results, failures included, are memoized in an `IpaCache`.

mod cache;
mod letters;
mod source;

pub use cache::{IpaCache, MemoryCache, NoCache};
pub use letters::SpellingRules;
pub use source::{NullSource, PhonemeSource, PronouncingDictionary, SourceError};

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::settings::settings;

/// Outcome of phonetic resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Cleaned IPA transcription.
    Phonemes(String),
    /// Both sources failed; carries the input word unchanged.
    Unresolved(String),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Phonemes(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Phonemes(s) | Resolution::Unresolved(s) => s,
        }
    }
}

pub struct Resolver {
    primary: Box<dyn PhonemeSource>,
    secondary: Box<dyn PhonemeSource>,
    cache: Arc<dyn IpaCache>,
    unresolved_mark: char,
    strip_marks: Vec<char>,
}

impl Resolver {
    pub fn new(
        primary: Box<dyn PhonemeSource>,
        secondary: Box<dyn PhonemeSource>,
        cache: Arc<dyn IpaCache>,
    ) -> Self {
        let fallback = &settings().fallback;
        Self {
            primary,
            secondary,
            cache,
            unresolved_mark: fallback.unresolved_mark,
            strip_marks: fallback.strip_marks.clone(),
        }
    }

    /// No pronouncing dictionary, spelling rules as the only working source,
    /// process-local memory cache.
    pub fn spelling_only() -> Self {
        Self::new(
            Box::new(NullSource),
            Box::new(SpellingRules),
            Arc::new(MemoryCache::new()),
        )
    }

    pub fn cache(&self) -> &dyn IpaCache {
        self.cache.as_ref()
    }

    pub fn resolve(&self, word: &str) -> Resolution {
        if let Some(hit) = self.cache.get(word) {
            return hit;
        }
        let _span = debug_span!("resolve", word).entered();
        let resolution = [&self.primary, &self.secondary]
            .into_iter()
            .find_map(|source| {
                let raw = source.transcribe(word);
                if raw.is_empty() || raw.ends_with(self.unresolved_mark) {
                    debug!(source = source.name(), "source failed");
                    return None;
                }
                let cleaned = self.strip(&raw);
                debug!(source = source.name(), ipa = cleaned.as_str());
                (!cleaned.is_empty()).then_some(cleaned)
            })
            .map_or_else(
                || Resolution::Unresolved(word.to_string()),
                Resolution::Phonemes,
            );
        self.cache.insert(word, resolution.clone());
        resolution
    }

    fn strip(&self, ipa: &str) -> String {
        ipa.chars()
            .filter(|c| !self.strip_marks.contains(c) && !c.is_whitespace())
            .collect()
    }
}
