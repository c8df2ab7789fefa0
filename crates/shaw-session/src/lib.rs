//! Document-level conversion and the line-oriented request loop.
//!
//! `Session` owns a `Transliterator` and converts whole documents (sentences
//! of annotated tokens). `serve` reads `ID:PAYLOAD` requests line by line and
//! answers each with exactly one `ID:RESULT` line.

mod document;
mod request;

#[cfg(test)]
mod tests;

pub use document::Document;
pub use request::{serve, Request, RequestError, ServeStats};

use shaw_core::classifier::{ExplainToken, Transliterator};
use tracing::debug_span;

pub struct Session {
    engine: Transliterator,
}

impl Session {
    pub fn new(engine: Transliterator) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Transliterator {
        &self.engine
    }

    /// Convert every sentence in order and concatenate the results.
    ///
    /// Sentences are independent; the output of one never influences the next.
    pub fn convert_document(&self, doc: &Document) -> String {
        let _span = debug_span!("convert_document", sentences = doc.sentences.len()).entered();
        doc.sentences
            .iter()
            .map(|sentence| self.engine.convert_sentence(sentence))
            .collect()
    }

    pub fn explain_document(&self, doc: &Document) -> Vec<Vec<ExplainToken>> {
        doc.sentences
            .iter()
            .map(|sentence| self.engine.explain_sentence(sentence))
            .collect()
    }

    /// Parse a JSON document payload and convert it.
    pub fn convert_payload(&self, payload: &str) -> Result<String, RequestError> {
        let doc = Document::from_json(payload)?;
        Ok(self.convert_document(&doc))
    }
}
