use serde::Serialize;

use super::{AnnotatedToken, SentenceContext, Transliterator};

/// Diagnostic record of how one token was rendered.
#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub text: String,
    pub lower: String,
    pub tag: String,
    /// Name of the rule that produced the rendering.
    pub rule: &'static str,
    pub body: String,
    pub whitespace: String,
}

impl Transliterator {
    /// Like `convert_sentence`, but reports the rule chosen for each token.
    pub fn explain_sentence(&self, tokens: &[AnnotatedToken]) -> Vec<ExplainToken> {
        let mut out = String::new();
        let mut explained = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            let ctx = SentenceContext::new(tokens, position, &out);
            let (rule, rendered) = self.classify_with_rule(token, &ctx);
            out.push_str(&rendered.body);
            out.push_str(&rendered.whitespace);
            explained.push(ExplainToken {
                text: token.text.clone(),
                lower: token.normalized_lower(),
                tag: token.tag.clone(),
                rule,
                body: rendered.body,
                whitespace: rendered.whitespace,
            });
        }
        explained
    }
}
