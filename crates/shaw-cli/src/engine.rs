//! Engine assembly from command-line resources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use shaw_core::classifier::Transliterator;
use shaw_core::fallback::{
    MemoryCache, NullSource, PhonemeSource, PronouncingDictionary, Resolver, SourceError,
    SpellingRules,
};
use shaw_core::lexicon::{
    CompositeLexicon, Lexicon, LexiconError, LexiconStore, PhraseList, UserLexicon,
};
use shaw_core::phoneme::{PhonemeConfigError, PhonemeMapper};
use shaw_core::settings::{self, SettingsError};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("lexicon {path}: {source}")]
    Lexicon { path: String, source: LexiconError },
    #[error("phrase list {path}: {source}")]
    Phrases { path: String, source: LexiconError },
    #[error("user lexicon {path}: {source}")]
    UserLexicon { path: String, source: LexiconError },
    #[error("pronouncing dictionary {path}: {source}")]
    IpaDict { path: String, source: SourceError },
    #[error("settings {path}: {source}")]
    Settings { path: String, source: SettingsError },
    #[error("IPA table {path}: {source}")]
    IpaTable {
        path: String,
        source: PhonemeConfigError,
    },
    #[error("reading {path}: {source}")]
    Read { path: String, source: io::Error },
}

/// Files an engine is built from. Only the lexicon is required.
#[derive(Debug, Default, Clone)]
pub struct EngineOptions {
    pub lexicon: PathBuf,
    pub phrases: Option<PathBuf>,
    pub ipa_dict: Option<PathBuf>,
    pub user_dict: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub ipa_table: Option<PathBuf>,
}

fn read(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|source| EngineError::Read {
        path: path.display().to_string(),
        source,
    })
}

impl EngineOptions {
    pub fn new(lexicon: impl Into<PathBuf>) -> Self {
        Self {
            lexicon: lexicon.into(),
            ..Self::default()
        }
    }

    /// Install custom settings and IPA table. Must run before anything reads
    /// the global configuration.
    pub fn install_globals(&self) -> Result<(), EngineError> {
        if let Some(path) = &self.settings {
            settings::init_custom(read(path)?).map_err(|source| EngineError::Settings {
                path: path.display().to_string(),
                source,
            })?;
        }
        if let Some(path) = &self.ipa_table {
            PhonemeMapper::init_custom(read(path)?).map_err(|source| EngineError::IpaTable {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn lexicon(&self) -> Result<Arc<dyn Lexicon>, EngineError> {
        let store = LexiconStore::load(&self.lexicon).map_err(|source| EngineError::Lexicon {
            path: self.lexicon.display().to_string(),
            source,
        })?;
        let (words, entries) = store.stats();
        info!(words, entries, path = %self.lexicon.display(), "lexicon loaded");
        let system: Arc<dyn Lexicon> = Arc::new(store);

        let Some(path) = &self.user_dict else {
            return Ok(system);
        };
        let user = UserLexicon::open(path).map_err(|source| EngineError::UserLexicon {
            path: path.display().to_string(),
            source,
        })?;
        // Lowest priority first: user spellings shadow the system lexicon.
        Ok(Arc::new(CompositeLexicon::new(vec![
            system,
            Arc::new(user) as Arc<dyn Lexicon>,
        ])))
    }

    /// Load the phrase list, if one is configured. An empty list is an error.
    pub fn phrases(&self) -> Result<Option<PhraseList>, EngineError> {
        let Some(path) = &self.phrases else {
            return Ok(None);
        };
        let err = |source| EngineError::Phrases {
            path: path.display().to_string(),
            source,
        };
        let phrases = PhraseList::open(path).map_err(err)?;
        if phrases.is_empty() {
            return Err(err(LexiconError::Empty));
        }
        info!(phrases = phrases.len(), "phrase list loaded");
        Ok(Some(phrases))
    }

    pub fn resolver(&self) -> Result<Resolver, EngineError> {
        let primary: Box<dyn PhonemeSource> = match &self.ipa_dict {
            Some(path) => {
                let dict =
                    PronouncingDictionary::open(path).map_err(|source| EngineError::IpaDict {
                        path: path.display().to_string(),
                        source,
                    })?;
                info!(words = dict.len(), "pronouncing dictionary loaded");
                Box::new(dict)
            }
            None => Box::new(NullSource),
        };
        Ok(Resolver::new(
            primary,
            Box::new(SpellingRules),
            Arc::new(MemoryCache::new()),
        ))
    }

    /// Install globals, then load every resource.
    ///
    /// The phrase list is only checked here; merging phrases is the tokenizer's job.
    pub fn build(&self) -> Result<Transliterator, EngineError> {
        self.install_globals()?;
        self.phrases()?;
        Ok(Transliterator::new(self.lexicon()?, self.resolver()?))
    }
}
