use serde::{Deserialize, Serialize};

use crate::unicode::normalize_apostrophes;

/// A token as produced by the external annotation pipeline.
///
/// Field aliases accept spaCy attribute names so pipeline output can be
/// serialized without renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    /// Lowercase form; derived from `text` when left empty.
    #[serde(default, alias = "lower_")]
    pub lower: String,
    /// Penn Treebank POS tag (`VBD`, `NNP`, `POS`, ...).
    #[serde(default, alias = "tag_")]
    pub tag: String,
    #[serde(default, alias = "whitespace_")]
    pub whitespace: String,
    /// Position within the sentence.
    #[serde(default, alias = "i")]
    pub index: usize,
    /// Token opens a named-entity span.
    #[serde(default)]
    pub ent_begin: bool,
    #[serde(default, alias = "ent_type_")]
    pub ent_type: String,
    /// Markup passed through verbatim.
    #[serde(default)]
    pub html: bool,
}

impl AnnotatedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>, whitespace: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lower: text.to_lowercase(),
            text,
            tag: tag.into(),
            whitespace: whitespace.into(),
            ..Self::default()
        }
    }

    /// Markup literal with no trailing whitespace.
    pub fn markup(text: impl Into<String>) -> Self {
        Self {
            html: true,
            ..Self::new(text, "HTML", "")
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Mark the token as the first of an entity span.
    pub fn entity(mut self, ent_type: impl Into<String>) -> Self {
        self.ent_begin = true;
        self.ent_type = ent_type.into();
        self
    }

    /// Lowercase form with typographic apostrophes folded to `'`.
    pub fn normalized_lower(&self) -> String {
        if self.lower.is_empty() {
            normalize_apostrophes(&self.text.to_lowercase())
        } else {
            normalize_apostrophes(&self.lower)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_spacy_names() {
        let json = r#"{"text":"Don","lower_":"don","tag_":"NNP","whitespace_":" ","i":3,
                       "ent_begin":true,"ent_type_":"PERSON"}"#;
        let t: AnnotatedToken = serde_json::from_str(json).unwrap();
        assert_eq!(t.lower, "don");
        assert_eq!(t.tag, "NNP");
        assert_eq!(t.whitespace, " ");
        assert_eq!(t.index, 3);
        assert!(t.ent_begin);
        assert_eq!(t.ent_type, "PERSON");
        assert!(!t.html);
    }

    #[test]
    fn defaults_for_missing_fields() {
        let t: AnnotatedToken = serde_json::from_str(r#"{"text":"Hello"}"#).unwrap();
        assert_eq!(t.tag, "");
        assert_eq!(t.normalized_lower(), "hello");
    }

    #[test]
    fn normalized_lower_folds_quotes() {
        let t = AnnotatedToken::new("n\u{2019}t", "RB", " ");
        assert_eq!(t.normalized_lower(), "n't");
    }
}
