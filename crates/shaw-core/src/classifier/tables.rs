//! Fixed renderings for contraction fragments, affixes and idioms.
//!
//! Order is significant: affix tables are tried top to bottom and the first
//! decomposition whose stem is in the lexicon wins.

pub(crate) type Table = &'static [(&'static str, &'static str)];

pub(crate) fn find(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

/// First halves of split contractions ("do" of "don't", "wo" of "won't").
pub(crate) const CONTRACTION_START: Table = &[
    ("ai", "𐑱"),
    ("ca", "𐑒𐑭"),
    ("do", "𐑛𐑴"),
    ("does", "𐑛𐑳𐑟"),
    ("did", "𐑛𐑦𐑛"),
    ("sha", "𐑖𐑭"),
    ("wo", "𐑢𐑴"),
    ("y'", "𐑘"),
];

pub(crate) const CONTRACTION_END: Table = &[
    ("n't", "𐑯𐑑"),
    ("all", "𐑷𐑤"),
    ("'ve", "𐑝"),
    ("'ll", "𐑤"),
    ("'m", "𐑥"),
    ("'d", "𐑛"),
    ("'re", "𐑼"),
];

/// Contraction ending that starts with a vowel and never takes the epenthetic vowel.
pub(crate) const VOWEL_CONTRACTION_END: &str = "'re";

pub(crate) const PREFIXES: Table = &[
    ("anti", "𐑨𐑯𐑑𐑦"),
    ("counter", "𐑒𐑬𐑯𐑑𐑼"),
    ("de", "𐑛𐑰"),
    ("dis", "𐑛𐑦𐑕"),
    ("hyper", "𐑣𐑲𐑐𐑼"),
    ("hypo", "𐑣𐑲𐑐𐑴"),
    ("mega", "𐑥𐑧𐑜𐑩"),
    ("meta", "𐑥𐑧𐑑𐑩"),
    ("micro", "𐑥𐑲𐑒𐑮𐑴"),
    ("multi", "𐑥𐑳𐑤𐑑𐑦"),
    ("mis", "𐑥𐑦𐑕"),
    ("neuro", "𐑯𐑘𐑫𐑼𐑴"),
    ("non", "𐑯𐑪𐑯"),
    ("o'er", "𐑴𐑼"),
    ("out", "𐑬𐑑"),
    ("over", "𐑴𐑝𐑼"),
    ("poly", "𐑐𐑪𐑤𐑦"),
    ("post", "𐑐𐑴𐑕𐑑"),
    ("pre", "𐑐𐑮𐑰"),
    ("pro", "𐑐𐑮𐑴"),
    ("pseudo", "𐑕𐑿𐑛𐑴"),
    ("re", "𐑮𐑰"),
    ("sub", "𐑕𐑳𐑚"),
    ("super", "𐑕𐑵𐑐𐑼"),
    ("ultra", "𐑳𐑤𐑑𐑮𐑩"),
    ("un", "𐑳𐑯"),
    ("under", "𐑳𐑯𐑛𐑼"),
];

pub(crate) const SUFFIXES: Table = &[
    ("able", "𐑩𐑚𐑩𐑤"),
    ("bound", "𐑚𐑬𐑯𐑛"),
    ("esque", "𐑧𐑕𐑒"),
    ("ful", "𐑓𐑩𐑤"),
    ("hood", "𐑣𐑫𐑛"),
    ("ish", "𐑦𐑖"),
    ("ism", "𐑦𐑟𐑩𐑥"),
    ("less", "𐑤𐑩𐑕"),
    ("like", "𐑤𐑲𐑒"),
    ("ness", "𐑯𐑩𐑕"),
];

/// "have to" meaning "must".
pub(crate) const HAVE_TO: Table = &[("have", "𐑣𐑨𐑓"), ("has", "𐑣𐑨𐑕")];

/// Past forms frozen in "used to", "supposed to".
pub(crate) const PAST_TO: Table = &[
    ("used", "𐑿𐑕𐑑"),
    ("unused", "𐑳𐑯𐑿𐑕𐑑"),
    ("supposed", "𐑕𐑩𐑐𐑴𐑕𐑑"),
];

/// Tags of the verb two tokens after "have" that license the obligation reading.
pub(crate) const HAVE_TO_VERB_TAGS: &[&str] = &["VB", "VBP"];

/// Tags on "used"/"supposed" itself that license the idiom reading.
pub(crate) const PAST_TO_TAGS: &[&str] = &["VBD", "VBN", "."];

/// Numeral suffixes, tried in order.
pub(crate) const ORDINAL_SUFFIXES: Table = &[
    ("st", "𐑕𐑑"),
    ("nd", "𐑯𐑛"),
    ("rd", "𐑮𐑛"),
    ("th", "𐑔"),
    ("s", "𐑟"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::is_shavian;

    #[test]
    fn renderings_are_shavian() {
        let tables = [
            CONTRACTION_START,
            CONTRACTION_END,
            PREFIXES,
            SUFFIXES,
            HAVE_TO,
            PAST_TO,
            ORDINAL_SUFFIXES,
        ];
        for table in tables {
            for (key, value) in table {
                assert!(value.chars().all(is_shavian), "{key} -> {value}");
            }
        }
    }

    #[test]
    fn no_affix_in_both_tables() {
        for (p, _) in PREFIXES {
            assert!(find(SUFFIXES, p).is_none(), "{p}");
        }
    }

    #[test]
    fn find_by_key() {
        assert_eq!(find(CONTRACTION_END, "n't"), Some("𐑯𐑑"));
        assert_eq!(find(CONTRACTION_END, "nt"), None);
        assert_eq!(find(CONTRACTION_END, VOWEL_CONTRACTION_END), Some("𐑼"));
    }
}
