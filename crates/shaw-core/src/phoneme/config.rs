use std::collections::BTreeMap;

use serde::Deserialize;

/// Longest key the mapper's lookahead window can match.
pub const MAX_KEY_SYMBOLS: usize = 2;

#[derive(Deserialize)]
struct PhonemeConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PhonemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty key")]
    EmptyKey,
    #[error("key longer than two symbols: {0}")]
    KeyTooLong(String),
    #[error("phoneme table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<ipa, glyphs>`.
///
/// Values may be empty: a symbol mapped to `""` is dropped from the output
/// (the glottal stop in the default table).
pub fn parse_phoneme_toml(toml_str: &str) -> Result<BTreeMap<String, String>, PhonemeConfigError> {
    let config: PhonemeConfig =
        toml::from_str(toml_str).map_err(|e| PhonemeConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(PhonemeConfigError::Empty);
    }

    for key in config.mappings.keys() {
        match key.chars().count() {
            0 => return Err(PhonemeConfigError::EmptyKey),
            n if n > MAX_KEY_SYMBOLS => return Err(PhonemeConfigError::KeyTooLong(key.clone())),
            _ => {}
        }
    }

    Ok(config.mappings)
}
