//! Multi-phrase matcher backing every keyword list in the knowledge seed.
//!
//! Phrases are lower-cased on construction and matched against a lower-cased
//! haystack. A phrase matches on word boundaries wherever its first or last
//! character is alphanumeric; a trailing `*` lifts the right boundary so
//! `retir*` matches "retired", "retirement" and "retiró".

use aho_corasick::{AhoCorasick, MatchKind};

use crate::errors::{VerityError, VerityResult};

/// A single phrase occurrence in a haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconMatch {
    /// Index of the phrase in declaration order.
    pub index: usize,
    pub phrase: String,
    /// Byte offsets into the haystack.
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    prefix: bool,
}

/// An immutable, named set of phrases compiled into one automaton.
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    phrases: Vec<Phrase>,
    automaton: Option<AhoCorasick>,
}

impl Lexicon {
    /// Compile `phrases`. Blank entries and duplicates are dropped; declaration
    /// order of the remaining phrases is kept.
    pub fn new<I, S>(name: impl Into<String>, phrases: I) -> VerityResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let mut compiled: Vec<Phrase> = Vec::new();
        for raw in phrases {
            let lowered = raw.as_ref().trim().to_lowercase();
            let (text, prefix) = match lowered.strip_suffix('*') {
                Some(stem) => (stem.trim_end().to_string(), true),
                None => (lowered, false),
            };
            if text.is_empty() || compiled.iter().any(|p| p.text == text && p.prefix == prefix) {
                continue;
            }
            compiled.push(Phrase { text, prefix });
        }

        if compiled.is_empty() {
            return Ok(Self {
                name,
                phrases: compiled,
                automaton: None,
            });
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(compiled.iter().map(|p| p.text.as_str()))
            .map_err(|e| VerityError::Lexicon {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            name,
            phrases: compiled,
            automaton: Some(automaton),
        })
    }

    /// A lexicon that never matches.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phrases: Vec::new(),
            automaton: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrases in declaration order, without the prefix marker.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|p| p.text.as_str())
    }

    /// Every boundary-respecting occurrence, ordered by start offset and then
    /// longest first. Occurrences may overlap.
    pub fn matches(&self, haystack: &str) -> Vec<LexiconMatch> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };
        let mut found: Vec<LexiconMatch> = automaton
            .find_overlapping_iter(haystack)
            .filter_map(|m| {
                let index = m.pattern().as_usize();
                let phrase = &self.phrases[index];
                on_boundaries(haystack, m.start(), m.end(), phrase).then(|| LexiconMatch {
                    index,
                    phrase: phrase.text.clone(),
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect();
        found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        found
    }

    pub fn contains_any(&self, haystack: &str) -> bool {
        !self.matches(haystack).is_empty()
    }

    /// The leftmost occurrence in the haystack.
    pub fn find_first(&self, haystack: &str) -> Option<LexiconMatch> {
        self.matches(haystack).into_iter().next()
    }

    /// Number of distinct phrases occurring in the haystack.
    pub fn count_distinct(&self, haystack: &str) -> usize {
        let mut indices: Vec<usize> = self.matches(haystack).iter().map(|m| m.index).collect();
        indices.sort_unstable();
        indices.dedup();
        indices.len()
    }
}

fn on_boundaries(haystack: &str, start: usize, end: usize, phrase: &Phrase) -> bool {
    let starts_alnum = phrase.text.chars().next().is_some_and(char::is_alphanumeric);
    if starts_alnum && haystack[..start].chars().next_back().is_some_and(char::is_alphanumeric) {
        return false;
    }
    let ends_alnum = phrase.text.chars().next_back().is_some_and(char::is_alphanumeric);
    if !phrase.prefix
        && ends_alnum
        && haystack[end..].chars().next().is_some_and(char::is_alphanumeric)
    {
        return false;
    }
    true
}
