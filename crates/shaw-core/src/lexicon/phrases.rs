use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::LexiconError;

/// Multi-word phrases the tokenizer merges into single tokens before
/// classification ("a priori", "ad hoc", ...).
///
/// Stored lowercased with single spaces between words.
pub struct PhraseList {
    phrases: HashSet<String>,
    max_words: usize,
}

impl PhraseList {
    /// Parse CSV text, taking the first field of each non-empty row.
    pub fn from_csv(text: &str) -> Self {
        let mut phrases = HashSet::new();
        let mut max_words = 0;
        for line in text.lines() {
            let Some(field) = first_csv_field(line) else {
                continue;
            };
            let normalized = normalize(&field);
            if normalized.is_empty() {
                continue;
            }
            max_words = max_words.max(normalized.split(' ').count());
            phrases.insert(normalized);
        }
        debug!(phrases = phrases.len(), max_words);
        Self { phrases, max_words }
    }

    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_csv(&text))
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Case- and spacing-insensitive membership.
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(&normalize(phrase))
    }

    /// Length in tokens of the longest phrase starting at `words[0]`.
    pub fn longest_match(&self, words: &[&str]) -> Option<usize> {
        let limit = self.max_words.min(words.len());
        (1..=limit)
            .rev()
            .find(|&n| self.phrases.contains(&normalize(&words[..n].join(" "))))
    }
}

fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// First field of a CSV row, honouring double-quoted fields with `""` escapes.
fn first_csv_field(line: &str) -> Option<String> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return None;
    }
    let Some(quoted) = line.strip_prefix('"') else {
        return Some(line.split(',').next().unwrap_or_default().to_string());
    };
    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
                field.push('"');
            } else {
                break;
            }
        } else {
            field.push(c);
        }
    }
    Some(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "a priori\nad hoc,extra\n\"per se\"\n\"say \"\"when\"\"\",x\n\n  \nde  facto\n";

    #[test]
    fn parse_rows() {
        let list = PhraseList::from_csv(SAMPLE);
        assert_eq!(list.len(), 5);
        assert!(list.contains("a priori"));
        assert!(list.contains("Ad Hoc"));
        assert!(list.contains("per se"));
        assert!(list.contains("say \"when\""));
        assert!(list.contains("de facto"));
        assert!(!list.contains("extra"));
    }

    #[test]
    fn longest_match_prefers_longer() {
        let list = PhraseList::from_csv("in vitro\nin vitro fertilisation\n");
        let words = ["In", "vitro", "fertilisation", "works"];
        assert_eq!(list.longest_match(&words), Some(3));
        assert_eq!(list.longest_match(&words[..2]), Some(2));
        assert_eq!(list.longest_match(&words[1..]), None);
    }

    #[test]
    fn empty_input() {
        let list = PhraseList::from_csv("");
        assert!(list.is_empty());
        assert_eq!(list.longest_match(&["a", "b"]), None);
    }
}
