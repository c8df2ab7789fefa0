//! Character-level classification for Latin input and Shavian output.

/// Check the Shavian block (U+10450..U+1047F).
pub fn is_shavian(c: char) -> bool {
    ('\u{10450}'..='\u{1047F}').contains(&c)
}

/// True when the string is non-empty and every character is alphabetic.
///
/// Matches the notion of "a word" used by the phonetic fallback: digits,
/// apostrophes and hyphens all disqualify.
pub fn is_alphabetic_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Replace typographic single quotes with the ASCII apostrophe.
///
/// Contraction and possessive fragments are keyed on `'`, but upstream
/// tokenizers pass through whatever quote the source text used.
pub fn normalize_apostrophes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
            other => other,
        })
        .collect()
}
