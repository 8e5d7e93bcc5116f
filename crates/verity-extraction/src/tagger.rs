//! Rule-based entity tagger backed by the knowledge base gazetteers.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use verity_core::errors::VerityResult;
use verity_core::models::{SpanKind, TaggedSpan};
use verity_core::traits::EntityTagger;
use verity_knowledge::dates::date_spans;
use verity_knowledge::KnowledgeBase;

/// Runs of capitalised words, allowing lower-case name particles between them.
static CAPITALIZED_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b\p{Lu}[\p{L}'’-]*(?:\s+(?:(?:da|de|del|dos|van|von)\s+)?\p{Lu}[\p{L}'’-]*)+").ok()
});

const NAME_PARTICLES: &[&str] = &["da", "de", "del", "dos", "van", "von"];
const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 4;

/// Default [`EntityTagger`]: dates by pattern, places and organizations by
/// gazetteer, persons by capitalised word runs.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    kb: Arc<KnowledgeBase>,
}

impl RuleTagger {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    fn person_candidates(&self, text: &str) -> Vec<String> {
        let Some(re) = CAPITALIZED_RUN.as_ref() else {
            return Vec::new();
        };
        re.find_iter(text)
            .filter_map(|m| self.clean_person(m.as_str()))
            .collect()
    }

    fn clean_person(&self, run: &str) -> Option<String> {
        let words: Vec<&str> = run
            .split_whitespace()
            .skip_while(|w| self.kb.is_person_stopword(w))
            .collect();
        let capitalized = words
            .iter()
            .filter(|w| !NAME_PARTICLES.contains(w))
            .count();
        if !(MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&capitalized) {
            return None;
        }
        if words.iter().any(|w| is_shouting(w)) {
            return None;
        }
        let name = words.join(" ");
        if self.kb.locations().contains(&name) || self.kb.organizations().contains(&name) {
            return None;
        }
        Some(name)
    }
}

impl EntityTagger for RuleTagger {
    fn tag(&self, text: &str) -> VerityResult<Vec<TaggedSpan>> {
        let mut spans: Vec<TaggedSpan> = date_spans(text)
            .into_iter()
            .map(|(s, e)| TaggedSpan::new(&text[s..e], SpanKind::Date))
            .collect();

        let lowered = text.to_lowercase();
        spans.extend(
            self.kb
                .locations()
                .find(&lowered)
                .into_iter()
                .map(|name| TaggedSpan::new(name, SpanKind::Location)),
        );
        spans.extend(
            self.kb
                .organizations()
                .find(&lowered)
                .into_iter()
                .map(|name| TaggedSpan::new(name, SpanKind::Organization)),
        );
        spans.extend(
            self.person_candidates(text)
                .into_iter()
                .map(|name| TaggedSpan::new(name, SpanKind::Person)),
        );
        Ok(spans)
    }
}

/// An all-caps word of two or more letters ("URGENTE", "BREAKING").
fn is_shouting(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}
