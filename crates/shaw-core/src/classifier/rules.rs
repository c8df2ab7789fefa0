use tracing::debug;

use crate::fallback::Resolution;
use crate::lexicon::{select_entry, LexiconEntry};
use crate::settings::settings;
use crate::unicode::{is_alphabetic_word, starts_uppercase};

use super::glyph::{is_consonant, sibilant_suffix, EPENTHETIC};
use super::ordinal::split_ordinal;
use super::tables::{
    find, Table, CONTRACTION_END, CONTRACTION_START, HAVE_TO, HAVE_TO_VERB_TAGS, PAST_TO,
    PAST_TO_TAGS, PREFIXES, SUFFIXES, VOWEL_CONTRACTION_END,
};
use super::{AnnotatedToken, Rendered, SentenceContext, Transliterator};

/// The token under classification with its normalized lowercase form.
pub(super) struct TokenView<'a> {
    pub token: &'a AnnotatedToken,
    pub lower: String,
    pub ctx: &'a SentenceContext<'a>,
}

impl TokenView<'_> {
    fn emit(&self, body: String) -> Rendered {
        Rendered::new(body, self.token.whitespace.clone())
    }

    fn ahead_lower(&self, n: usize) -> Option<String> {
        self.ctx.ahead(n).map(AnnotatedToken::normalized_lower)
    }
}

/// One step of the classification chain. Returning `None` passes the token on.
pub(super) trait TokenRule: Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, engine: &Transliterator, view: &TokenView<'_>) -> Option<Rendered>;
}

/// Rules in priority order. The last rule always produces output.
pub(super) static RULE_CHAIN: &[&dyn TokenRule] = &[
    &Markup,
    &ContractionStart,
    &ContractionEnd,
    &PossessiveS,
    &PossessiveApostrophe,
    &BeforeTo,
    &OrdinalNumeral,
    &LexiconHit,
    &Constructive,
    &Phonetic,
];

/// Namer mark for an entry reached from `token`, if the token opens a
/// markable entity and the entry is not an initialism.
fn namer_for(token: &AnnotatedToken, entry: &LexiconEntry) -> &'static str {
    let s = settings();
    if token.ent_begin
        && s.entities.is_markable(&token.ent_type)
        && !entry.is_initialism(&s.markers.initialism)
    {
        s.markers.namer.as_str()
    } else {
        ""
    }
}

struct Markup;

impl TokenRule for Markup {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn apply(&self, _: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        view.token
            .html
            .then(|| view.emit(view.token.text.clone()))
    }
}

struct ContractionStart;

impl TokenRule for ContractionStart {
    fn name(&self) -> &'static str {
        "contraction-start"
    }

    fn apply(&self, _: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        let rendering = find(CONTRACTION_START, &view.lower)?;
        let next = view.ahead_lower(1)?;
        find(CONTRACTION_END, &next)?;
        // The ending follows with no space between.
        Some(Rendered::new(rendering.to_string(), String::new()))
    }
}

struct ContractionEnd;

impl TokenRule for ContractionEnd {
    fn name(&self) -> &'static str {
        "contraction-end"
    }

    fn apply(&self, _: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        let rendering = find(CONTRACTION_END, &view.lower)?;
        let epenthetic = view.lower != VOWEL_CONTRACTION_END
            && view.ctx.last_glyph().is_some_and(is_consonant);
        let mut body = String::new();
        if epenthetic {
            body.push_str(EPENTHETIC);
        }
        body.push_str(rendering);
        Some(view.emit(body))
    }
}

struct PossessiveS;

impl TokenRule for PossessiveS {
    fn name(&self) -> &'static str {
        "possessive-s"
    }

    fn apply(&self, _: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        (view.lower == "'s").then(|| view.emit(sibilant_suffix(view.ctx.last_glyph()).to_string()))
    }
}

struct PossessiveApostrophe;

impl TokenRule for PossessiveApostrophe {
    fn name(&self) -> &'static str {
        "possessive-apostrophe"
    }

    fn apply(&self, _: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        (view.lower == "'" && view.token.tag == "POS").then(|| view.emit(String::new()))
    }
}

/// "have to" (obligation) and "used to" / "supposed to" (idiom).
struct BeforeTo;

impl TokenRule for BeforeTo {
    fn name(&self) -> &'static str {
        "before-to"
    }

    fn apply(&self, _: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        if view.ahead_lower(1).as_deref() != Some("to") {
            return None;
        }
        if let Some(rendering) = find(HAVE_TO, &view.lower) {
            // Out of range lookahead means no shift.
            let verb_follows = view
                .ctx
                .ahead(2)
                .is_some_and(|t| HAVE_TO_VERB_TAGS.contains(&t.tag.as_str()));
            return verb_follows.then(|| view.emit(rendering.to_string()));
        }
        let rendering = find(PAST_TO, &view.lower)?;
        PAST_TO_TAGS
            .contains(&view.token.tag.as_str())
            .then(|| view.emit(rendering.to_string()))
    }
}

struct OrdinalNumeral;

impl TokenRule for OrdinalNumeral {
    fn name(&self) -> &'static str {
        "ordinal"
    }

    fn apply(&self, _: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        let (numeral, suffix) = split_ordinal(&view.lower)?;
        Some(view.emit(format!("{numeral}{suffix}")))
    }
}

struct LexiconHit;

impl TokenRule for LexiconHit {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn apply(&self, engine: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        let entries = engine.lexicon.lookup(&view.lower);
        let entry = select_entry(&entries, &view.token.tag)?;
        let namer = namer_for(view.token, entry);
        Some(view.emit(format!("{namer}{}", entry.script)))
    }
}

/// Affix stripping and synthesized plurals for words missing from the lexicon.
struct Constructive;

impl Constructive {
    fn affixed(
        engine: &Transliterator,
        view: &TokenView<'_>,
        table: Table,
        strip: fn(&str, &str) -> Option<String>,
    ) -> Option<(LexiconEntry, String)> {
        table.iter().find_map(|&(affix, rendering)| {
            let stem = strip(&view.lower, affix).filter(|s| !s.is_empty())?;
            let entry = engine.lexicon.first(&stem)?;
            debug!(affix, stem = stem.as_str(), "affix decomposition");
            Some((entry, rendering.to_string()))
        })
    }
}

impl TokenRule for Constructive {
    fn name(&self) -> &'static str {
        "constructed"
    }

    fn apply(&self, engine: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        let constructed = &settings().markers.constructed;

        if let Some((entry, prefix)) = Self::affixed(engine, view, PREFIXES, |w, a| {
            w.strip_prefix(a).map(str::to_string)
        }) {
            let namer = namer_for(view.token, &entry);
            return Some(view.emit(format!("{namer}{prefix}{}{constructed}", entry.script)));
        }

        if let Some((entry, suffix)) = Self::affixed(engine, view, SUFFIXES, |w, a| {
            w.strip_suffix(a).map(str::to_string)
        }) {
            let namer = namer_for(view.token, &entry);
            return Some(view.emit(format!("{namer}{}{suffix}{constructed}", entry.script)));
        }

        let stem = view.lower.strip_suffix('s').filter(|s| !s.is_empty())?;
        let entry = engine.lexicon.first(stem)?;
        let plural = sibilant_suffix(entry.script.chars().last());
        let namer = namer_for(view.token, &entry);
        Some(view.emit(format!("{namer}{}{plural}{constructed}", entry.script)))
    }
}

/// Last resort: phonetic transcription for alphabetic words, verbatim otherwise.
struct Phonetic;

impl TokenRule for Phonetic {
    fn name(&self) -> &'static str {
        "phonetic"
    }

    fn apply(&self, engine: &Transliterator, view: &TokenView<'_>) -> Option<Rendered> {
        let text = &view.token.text;
        if !is_alphabetic_word(text) {
            return Some(view.emit(text.clone()));
        }
        match engine.resolver.resolve(text) {
            Resolution::Phonemes(ipa) => {
                let markers = &settings().markers;
                let namer = if starts_uppercase(text) {
                    markers.namer.as_str()
                } else {
                    ""
                };
                let glyphs = engine.mapper.map(&ipa);
                Some(view.emit(format!("{namer}{glyphs}{}", markers.phonetic)))
            }
            Resolution::Unresolved(_) => Some(view.emit(text.clone())),
        }
    }
}
