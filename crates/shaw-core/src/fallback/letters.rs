use super::source::{unresolved, PhonemeSource};

/// Function words whose `th` is voiced.
const VOICED_TH: &[&str] = &[
    "the", "this", "that", "these", "those", "they", "them", "their", "there", "than", "then",
    "thus", "though",
];

/// Letter-to-sound rules.
///
/// Crude by nature: the output is flagged downstream as phonetic, so it only
/// has to be a plausible reading. Letters the rules do not know (accented or
/// non-Latin) are kept as their own symbol and reach the mapper unchanged.
/// Only empty words and words with non-letters are reported as failures.
pub struct SpellingRules;

impl PhonemeSource for SpellingRules {
    fn name(&self) -> &'static str {
        "spelling-rules"
    }

    fn transcribe(&self, word: &str) -> String {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return unresolved(word);
        }
        letters_to_ipa(&word.to_lowercase())
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c) && c != 'y'
}

fn letters_to_ipa(word: &str) -> String {
    let w: Vec<char> = word.chars().collect();
    let n = w.len();
    let at = |i: usize| w.get(i).copied();
    let is_front = |i: usize| matches!(at(i), Some('e' | 'i' | 'y'));

    // "make", "rose": a final e after an earlier vowel is silent and
    // lengthens the vowel before a single consonant.
    let silent_e = n > 2 && w[n - 1] == 'e' && w[..n - 2].iter().any(|&c| is_vowel(c));
    let magic_e_at = silent_e.then(|| n - 3).filter(|&v| is_vowel(w[v]) && is_consonant(w[n - 2]));

    let mut ipa = String::with_capacity(word.len() * 2);
    let mut i = 0;
    while i < n {
        let rest = &w[i..];

        if rest.starts_with(&['t', 'c', 'h']) {
            ipa.push_str("tʃ");
            i += 3;
            continue;
        }
        if rest.starts_with(&['d', 'g', 'e']) {
            ipa.push_str("dʒ");
            i += 3;
            continue;
        }

        if let [first, second, ..] = *rest {
            let digraph = match (first, second) {
                ('t', 'h') if VOICED_TH.contains(&word) => Some("ð"),
                ('t', 'h') => Some("θ"),
                ('c', 'h') => Some("tʃ"),
                ('s', 'h') => Some("ʃ"),
                ('p', 'h') => Some("f"),
                ('w', 'h') => Some("w"),
                ('q', 'u') => Some("kw"),
                ('n', 'g') => Some("ŋ"),
                ('c', 'k') => Some("k"),
                ('g', 'h') if i == 0 => Some("g"),
                ('g', 'h') => Some(""),
                ('e', 'e' | 'a') => Some("iː"),
                ('o', 'o') => Some("uː"),
                ('o', 'u' | 'w') => Some("aʊ"),
                ('o', 'i' | 'y') => Some("ɔɪ"),
                ('a', 'i' | 'y') => Some("eɪ"),
                ('a', 'u' | 'w') => Some("ɔː"),
                _ => None,
            };
            if let Some(sound) = digraph {
                ipa.push_str(sound);
                i += 2;
                continue;
            }
        }

        let c = w[i];
        let sound = match c {
            'a' | 'e' | 'i' | 'o' | 'u' if magic_e_at == Some(i) => match c {
                'a' => "eɪ",
                'e' => "iː",
                'i' => "aɪ",
                'o' => "oʊ",
                _ => "juː",
            },
            'e' if i == n - 1 => {
                if silent_e {
                    ""
                } else {
                    "iː"
                }
            }
            'a' if at(i + 1) == Some('r') => "ɑː",
            'a' => "æ",
            'e' if at(i + 1).is_some_and(is_vowel) => "iː",
            'e' => "e",
            'i' if i == n - 1 => "iː",
            'i' => "ɪ",
            'o' => "ɒ",
            'u' => "ʌ",
            'y' if i == 0 || at(i + 1).is_some_and(is_vowel) => "j",
            'y' if i == n - 1 && w[..i].iter().any(|&c| is_vowel(c)) => "iː",
            'y' if i == n - 1 => "aɪ",
            'y' => "ɪ",
            'c' if is_front(i + 1) => "s",
            'c' => "k",
            'g' if is_front(i + 1) => "dʒ",
            'g' => "g",
            's' if i > 0 && is_vowel(w[i - 1]) && at(i + 1).is_some_and(is_vowel) => "z",
            's' => "s",
            'j' => "dʒ",
            'q' => "k",
            'x' => "ks",
            'r' => "r",
            other => {
                // Remaining consonants and unknown letters stand for themselves.
                ipa.push(other);
                i += 1;
                while at(i) == Some(other) {
                    i += 1;
                }
                continue;
            }
        };
        ipa.push_str(sound);
        i += 1;
        if is_consonant(c) {
            while at(i) == Some(c) {
                i += 1;
            }
        }
    }
    ipa
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipa(word: &str) -> String {
        SpellingRules.transcribe(word)
    }

    #[test]
    fn plain_consonants_and_short_vowels() {
        assert_eq!(ipa("cat"), "kæt");
        assert_eq!(ipa("ship"), "ʃɪp");
        assert_eq!(ipa("bell"), "bel");
    }

    #[test]
    fn voiced_th_in_function_words() {
        assert_eq!(ipa("the"), "ðiː");
        assert_eq!(ipa("thin"), "θɪn");
    }

    #[test]
    fn magic_e() {
        assert_eq!(ipa("make"), "meɪk");
        assert_eq!(ipa("rose"), "roʊz");
        assert_eq!(ipa("cute"), "kjuːt");
    }

    #[test]
    fn soft_c_and_g() {
        assert_eq!(ipa("city"), "sɪtiː");
        assert_eq!(ipa("gem"), "dʒem");
        assert_eq!(ipa("got"), "gɒt");
    }

    #[test]
    fn trigraphs() {
        assert_eq!(ipa("judge"), "dʒʌdʒ");
        assert_eq!(ipa("match"), "mætʃ");
    }

    #[test]
    fn gh_handling() {
        assert_eq!(ipa("ghost"), "gɒst");
        assert_eq!(ipa("night"), "nɪt");
    }

    #[test]
    fn y_as_consonant_and_vowel() {
        assert_eq!(ipa("yes"), "jes");
        assert_eq!(ipa("my"), "maɪ");
        assert_eq!(ipa("happy"), "hæpiː");
        assert_eq!(ipa("myth"), "mɪθ");
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(ipa("Zorblax"), "zɒrblæks");
        assert_eq!(ipa("QUICK"), "kwɪk");
    }

    #[test]
    fn unknown_letters_kept_as_symbols() {
        assert_eq!(ipa("café"), "kæfé");
        assert_eq!(ipa("Zoë"), "zɒë");
        assert_eq!(ipa("Ångström"), "åŋström");
    }

    #[test]
    fn non_letters_fail() {
        assert_eq!(ipa("r2d2"), "r2d2*");
        assert_eq!(ipa("e-mail"), "e-mail*");
        assert_eq!(ipa(""), "*");
    }
}
