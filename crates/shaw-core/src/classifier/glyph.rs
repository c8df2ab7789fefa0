//! Consonant classes that pick the allomorph of a following `'s` or plural `s`.

/// Epenthetic vowel inserted between a consonant and a consonantal suffix.
pub const EPENTHETIC: &str = "𐑩";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    /// Voiceless stops and fricatives: suffix is `𐑕`.
    Voiceless,
    /// Sibilants: suffix is `𐑩𐑟`.
    Sibilant,
    /// Voiced consonants and r-coloured vowels: suffix is `𐑟`.
    Voiced,
}

pub fn glyph_class(c: char) -> Option<GlyphClass> {
    match c {
        '𐑐' | '𐑑' | '𐑒' | '𐑓' | '𐑔' => Some(GlyphClass::Voiceless),
        '𐑕' | '𐑖' | '𐑗' | '𐑟' | '𐑠' | '𐑡' => Some(GlyphClass::Sibilant),
        '𐑚' | '𐑛' | '𐑜' | '𐑝' | '𐑞' | '𐑙' | '𐑤' | '𐑥' | '𐑯' | '𐑸' | '𐑹' | '𐑺' | '𐑻' | '𐑼'
        | '𐑽' => Some(GlyphClass::Voiced),
        _ => None,
    }
}

pub fn is_consonant(c: char) -> bool {
    glyph_class(c).is_some()
}

/// Possessive / plural suffix to attach after `last`.
pub fn sibilant_suffix(last: Option<char>) -> &'static str {
    match last.and_then(glyph_class) {
        Some(GlyphClass::Voiceless) => "𐑕",
        Some(GlyphClass::Sibilant) => "𐑩𐑟",
        _ => "𐑟",
    }
}
