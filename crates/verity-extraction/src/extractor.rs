//! Entity and event extraction.

use std::sync::Arc;

use verity_core::models::{EventType, ExtractedEntities};
use verity_core::traits::EntityTagger;
use verity_core::{Lexicon, LexiconMatch};
use verity_knowledge::KnowledgeBase;
use verity_observability::events;

use crate::tagger::RuleTagger;
use crate::tokens::{token_spans, window};

/// Tokens on each side of a death trigger searched for policy context.
const VETO_WINDOW: usize = 5;
/// Tokens kept before and after a time keyword when recovering a claimed date.
const DATE_WINDOW_BEFORE: usize = 1;
const DATE_WINDOW_AFTER: usize = 2;

/// Extracts persons, places, organizations, dates and events from a text.
///
/// Pure with respect to its input: no I/O, same text in, same entities out.
pub struct EntityExtractor {
    kb: Arc<KnowledgeBase>,
    tagger: Arc<dyn EntityTagger>,
}

impl EntityExtractor {
    /// An extractor using the rule tagger.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        let tagger = Arc::new(RuleTagger::new(Arc::clone(&kb)));
        Self { kb, tagger }
    }

    pub fn with_tagger(kb: Arc<KnowledgeBase>, tagger: Arc<dyn EntityTagger>) -> Self {
        Self { kb, tagger }
    }

    pub fn extract(&self, text: &str) -> ExtractedEntities {
        let mut entities = ExtractedEntities::default();

        match self.tagger.tag(text) {
            Ok(spans) => spans.into_iter().for_each(|span| entities.add_span(span)),
            Err(err) => events::tagger_degraded(&err.to_string()),
        }

        let lowered = text.to_lowercase();
        for entity in self.kb.alias_mentions(&lowered) {
            let name = entity.display_name();
            if !entities.has_person(&name) {
                entities.push_person(name);
            }
        }

        let tokens = token_spans(&lowered);
        for (event_type, lexicon) in self.kb.event_lexicons() {
            let trigger = match event_type {
                EventType::Death => self.first_unvetoed(lexicon, &lowered, &tokens),
                _ => lexicon.find_first(&lowered),
            };
            if let Some(m) = trigger {
                entities.push_event(event_type, m.phrase);
            }
        }

        entities
    }

    /// The date expression a death claim refers to: the first tagged date,
    /// else the words around the first time keyword.
    pub fn claimed_date(&self, text: &str, entities: &ExtractedEntities) -> Option<String> {
        if let Some(date) = entities.dates.first() {
            return Some(date.clone());
        }
        let lowered = text.to_lowercase();
        let tokens = token_spans(&lowered);
        self.kb.time_keywords().iter().find_map(|keyword| {
            let i = tokens
                .iter()
                .position(|&(s, e)| lowered[s..e].contains(keyword.as_str()))?;
            Some(window(
                &lowered,
                &tokens,
                i.saturating_sub(DATE_WINDOW_BEFORE),
                i + DATE_WINDOW_AFTER,
            ))
        })
    }

    fn first_unvetoed(
        &self,
        lexicon: &Lexicon,
        lowered: &str,
        tokens: &[(usize, usize)],
    ) -> Option<LexiconMatch> {
        lexicon.matches(lowered).into_iter().find(|m| {
            let Some(i) = tokens.iter().position(|&(s, e)| s <= m.start && m.start < e) else {
                return true;
            };
            let context = window(
                lowered,
                tokens,
                i.saturating_sub(VETO_WINDOW),
                i + VETO_WINDOW,
            );
            let vetoed = self.kb.death_veto().contains_any(&context);
            if vetoed {
                events::death_event_vetoed(&m.phrase, &context);
            }
            !vetoed
        })
    }
}
