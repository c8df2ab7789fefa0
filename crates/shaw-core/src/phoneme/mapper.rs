use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::config::{parse_phoneme_toml, PhonemeConfigError, MAX_KEY_SYMBOLS};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Stateless symbol → glyph table.
pub struct PhonemeMapper {
    table: HashMap<String, String>,
}

impl PhonemeMapper {
    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self {
            table: map.into_iter().collect(),
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, PhonemeConfigError> {
        parse_phoneme_toml(toml_str).map(Self::from_map)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), PhonemeConfigError> {
        // Validate eagerly
        parse_phoneme_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PhonemeConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhonemeMapper {
        static INSTANCE: OnceLock<PhonemeMapper> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("phoneme TOML must be valid")
        })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn get(&self, symbols: &str) -> Option<&str> {
        self.table.get(symbols).map(String::as_str)
    }

    /// Map a transcription to glyphs, longest match first.
    pub fn map(&self, transcription: &str) -> String {
        let symbols: Vec<char> = transcription.chars().collect();
        let mut out = String::with_capacity(transcription.len() * 2);
        let mut key = String::with_capacity(8);
        let mut i = 0;
        'scan: while i < symbols.len() {
            for width in (1..=MAX_KEY_SYMBOLS.min(symbols.len() - i)).rev() {
                key.clear();
                key.extend(&symbols[i..i + width]);
                if let Some(glyphs) = self.table.get(&key) {
                    out.push_str(glyphs);
                    i += width;
                    continue 'scan;
                }
            }
            out.push(symbols[i]);
            i += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> &'static PhonemeMapper {
        PhonemeMapper::global()
    }

    #[test]
    fn test_single_symbols() {
        assert_eq!(mapper().map("kæt"), "𐑒𐑨𐑑");
        assert_eq!(mapper().map("bɛd"), "𐑚𐑧𐑛");
    }

    #[test]
    fn test_digraph_preferred() {
        assert_eq!(mapper().map("tʃɪn"), "𐑗𐑦𐑯");
        assert_eq!(mapper().map("dʒæm"), "𐑡𐑨𐑥");
        assert_eq!(mapper().map("baɪt"), "𐑚𐑲𐑑");
    }

    #[test]
    fn test_digraph_at_end() {
        assert_eq!(mapper().map("feɪ"), "𐑓𐑱");
    }

    #[test]
    fn test_unmapped_passes_through() {
        assert_eq!(mapper().map("k#t"), "𐑒#𐑑");
        assert_eq!(mapper().map("1"), "1");
    }

    #[test]
    fn test_empty_value_drops_symbol() {
        assert_eq!(mapper().map("bʌʔn"), "𐑚𐑳𐑯");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(mapper().map(""), "");
    }

    #[test]
    fn test_deterministic() {
        let a = mapper().map("ʃævi.ən");
        let b = mapper().map("ʃævi.ən");
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_table() {
        let m = PhonemeMapper::from_toml("[mappings]\na = \"A\"\nab = \"X\"\n").unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.map("aab"), "AX");
        assert_eq!(m.map("ba"), "bA");
    }

    #[test]
    fn test_all_default_keys_map() {
        let map = parse_phoneme_toml(DEFAULT_TOML).unwrap();
        for (key, value) in &map {
            assert_eq!(mapper().get(key), Some(value.as_str()), "key {key}");
        }
    }
}
