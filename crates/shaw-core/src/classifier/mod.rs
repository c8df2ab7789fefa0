//! Per-token decision engine.
//!
//! `Transliterator` renders annotated tokens one at a time. Each token runs
//! through a fixed chain of rules (markup, contractions, possessives, "have
//! to"/"used to", ordinals, lexicon, affix construction, phonetic fallback);
//! the first rule that produces output wins. Some rules look at up to two
//! following tokens or at the last glyph already emitted, so tokens within a
//! sentence are processed strictly in order.

mod explain;
mod glyph;
mod ordinal;
mod rules;
mod tables;
#[cfg(test)]
mod tests;
mod token;

pub use explain::ExplainToken;
pub use glyph::{glyph_class, is_consonant, sibilant_suffix, GlyphClass, EPENTHETIC};
pub use token::AnnotatedToken;

use std::sync::Arc;

use tracing::{debug, debug_span, trace};

use crate::fallback::Resolver;
use crate::lexicon::Lexicon;
use crate::phoneme::PhonemeMapper;

use rules::{TokenView, RULE_CHAIN};

/// Output of one token: the rendering and the whitespace that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    pub whitespace: String,
}

impl Rendered {
    pub fn new(body: String, whitespace: String) -> Self {
        Self { body, whitespace }
    }
}

/// What a rule may see besides the token itself.
pub struct SentenceContext<'a> {
    tokens: &'a [AnnotatedToken],
    position: usize,
    rendered: &'a str,
}

impl<'a> SentenceContext<'a> {
    /// `position` is the current token's index in `tokens`; `rendered` is the
    /// output produced for the sentence so far.
    pub fn new(tokens: &'a [AnnotatedToken], position: usize, rendered: &'a str) -> Self {
        Self {
            tokens,
            position,
            rendered,
        }
    }

    /// Token `n` places after the current one.
    pub fn ahead(&self, n: usize) -> Option<&'a AnnotatedToken> {
        self.tokens.get(self.position.checked_add(n)?)
    }

    /// Last character emitted so far, whitespace included.
    pub fn last_glyph(&self) -> Option<char> {
        self.rendered.chars().last()
    }

    pub fn rendered(&self) -> &'a str {
        self.rendered
    }
}

pub struct Transliterator {
    lexicon: Arc<dyn Lexicon>,
    resolver: Resolver,
    mapper: &'static PhonemeMapper,
}

impl Transliterator {
    /// Uses the global phoneme table.
    pub fn new(lexicon: Arc<dyn Lexicon>, resolver: Resolver) -> Self {
        Self {
            lexicon,
            resolver,
            mapper: PhonemeMapper::global(),
        }
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn mapper(&self) -> &PhonemeMapper {
        self.mapper
    }

    /// Render one token. Never fails: unmatched input is passed through.
    pub fn classify(&self, token: &AnnotatedToken, ctx: &SentenceContext<'_>) -> Rendered {
        self.classify_with_rule(token, ctx).1
    }

    pub(crate) fn classify_with_rule(
        &self,
        token: &AnnotatedToken,
        ctx: &SentenceContext<'_>,
    ) -> (&'static str, Rendered) {
        let view = TokenView {
            token,
            lower: token.normalized_lower(),
            ctx,
        };
        for rule in RULE_CHAIN {
            if let Some(rendered) = rule.apply(self, &view) {
                trace!(token = token.text.as_str(), rule = rule.name());
                return (rule.name(), rendered);
            }
        }
        (
            "passthrough",
            Rendered::new(token.text.clone(), token.whitespace.clone()),
        )
    }

    /// Render a sentence: every token's segment in order, concatenated.
    pub fn convert_sentence(&self, tokens: &[AnnotatedToken]) -> String {
        let _span = debug_span!("convert_sentence", tokens = tokens.len()).entered();
        let mut out = String::new();
        for (position, token) in tokens.iter().enumerate() {
            let ctx = SentenceContext::new(tokens, position, &out);
            let rendered = self.classify(token, &ctx);
            out.push_str(&rendered.body);
            out.push_str(&rendered.whitespace);
        }
        debug!(bytes = out.len());
        out
    }
}
