use serde::{Deserialize, Serialize};
use shaw_core::classifier::AnnotatedToken;

/// Annotated text: sentences of tokens, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub sentences: Vec<Vec<AnnotatedToken>>,
}

/// Accepted payload shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Sentences(Vec<Vec<AnnotatedToken>>),
    Sentence(Vec<AnnotatedToken>),
}

impl Document {
    pub fn new(sentences: Vec<Vec<AnnotatedToken>>) -> Self {
        Self { sentences }
    }

    /// Parse either an array of sentences or a single flat sentence.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let sentences = match serde_json::from_str(json)? {
            Payload::Sentences(sentences) => sentences,
            Payload::Sentence(tokens) => vec![tokens],
        };
        Ok(Self { sentences })
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}
