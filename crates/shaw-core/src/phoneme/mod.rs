//! IPA-to-Shavian glyph mapping.
//!
//! A data-driven table (`default_ipa.toml`) maps single phonetic symbols and
//! two-symbol digraphs to Shavian glyphs. Scanning is greedy left to right,
//! preferring the two-symbol window; unmapped symbols pass through unchanged.

mod config;
mod mapper;
mod table;

pub use config::{parse_phoneme_toml, PhonemeConfigError, MAX_KEY_SYMBOLS};
pub use mapper::PhonemeMapper;
pub use table::DEFAULT_TOML;
