use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::settings::settings;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("pronouncing dictionary has no entries")]
    Empty,
}

/// Something that turns a word into an IPA transcription.
///
/// Failure is signalled in-band: the returned string ends with the configured
/// unresolved mark (`*` by default).
pub trait PhonemeSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn transcribe(&self, word: &str) -> String;
}

pub(super) fn unresolved(word: &str) -> String {
    let mut s = word.to_string();
    s.push(settings().fallback.unresolved_mark);
    s
}

/// Always fails. Stands in for the primary source when no dictionary is configured.
pub struct NullSource;

impl PhonemeSource for NullSource {
    fn name(&self) -> &'static str {
        "null"
    }

    fn transcribe(&self, word: &str) -> String {
        unresolved(word)
    }
}

/// Word → IPA table loaded from a text file.
///
/// One entry per line, `<word> TAB <ipa>`. The IPA column may list
/// alternatives as `/ipa1/, /ipa2/`; the first is used. The first line for a
/// word wins. Blank lines and lines starting with `#` are skipped.
pub struct PronouncingDictionary {
    entries: HashMap<String, String>,
}

impl PronouncingDictionary {
    pub fn from_text(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((word, ipa)) = line.split_once('\t') else {
                continue;
            };
            let ipa = first_alternative(ipa);
            if ipa.is_empty() {
                continue;
            }
            entries
                .entry(word.trim().to_lowercase())
                .or_insert_with(|| ipa.to_string());
        }
        debug!(words = entries.len(), "pronouncing dictionary loaded");
        Self { entries }
    }

    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let dict = Self::from_text(&fs::read_to_string(path)?);
        if dict.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn first_alternative(ipa: &str) -> &str {
    ipa.split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('/')
        .trim()
}

impl PhonemeSource for PronouncingDictionary {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn transcribe(&self, word: &str) -> String {
        match self.entries.get(&word.to_lowercase()) {
            Some(ipa) => ipa.clone(),
            None => unresolved(word),
        }
    }
}
