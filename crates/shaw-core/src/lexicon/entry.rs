use serde::{Deserialize, Serialize};

/// Tag carried by entries of words with one pronunciation regardless of POS.
pub const SINGLE_PRONUNCIATION: &str = "0";

/// One rendering of a word.
///
/// Field names follow the ReadLex converter JSON (`tag`, `Shaw`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub tag: String,
    #[serde(rename = "Shaw", alias = "script")]
    pub script: String,
}

/// How well an entry's tag fits a token's POS tag. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TagMatch {
    /// The entry tag equals the token tag.
    Exact,
    /// A common-noun entry standing in for a proper noun (NN for NNP, NNS for NNPS).
    ProperAsCommon,
    /// The entry is the sole, tag-independent pronunciation.
    Single,
}

impl LexiconEntry {
    pub fn new(tag: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            script: script.into(),
        }
    }

    pub fn is_single(&self) -> bool {
        self.tag == SINGLE_PRONUNCIATION
    }

    pub fn tag_match(&self, pos: &str) -> Option<TagMatch> {
        if self.tag == pos {
            return Some(TagMatch::Exact);
        }
        let as_common = matches!(
            (self.tag.as_str(), pos),
            ("NN" | SINGLE_PRONUNCIATION, "NNP") | ("NNS" | SINGLE_PRONUNCIATION, "NNPS")
        );
        if as_common {
            Some(TagMatch::ProperAsCommon)
        } else if self.is_single() {
            Some(TagMatch::Single)
        } else {
            None
        }
    }

    /// Initialisms carry a leading marker and never take a namer mark.
    pub fn is_initialism(&self, marker: &str) -> bool {
        self.script.starts_with(marker)
    }
}

/// Pick the entry for a POS tag: best `TagMatch` first, list order breaks ties.
pub fn select_entry<'a>(entries: &'a [LexiconEntry], pos: &str) -> Option<&'a LexiconEntry> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.tag_match(pos).map(|m| (m, i, e)))
        .min_by_key(|&(m, i, _)| (m, i))
        .map(|(_, _, e)| e)
}
