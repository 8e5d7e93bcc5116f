use std::sync::Arc;

use test_fixtures::mocks::FailingTagger;
use verity_core::models::EventType;
use verity_extraction::EntityExtractor;
use verity_knowledge::KnowledgeBase;

fn kb() -> Arc<KnowledgeBase> {
    Arc::new(KnowledgeBase::embedded().unwrap())
}

fn extractor() -> EntityExtractor {
    EntityExtractor::new(kb())
}

// ─── Alias recovery ─────────────────────────────────────────────────────────

#[test]
fn surname_only_mention_recovers_canonical_name() {
    let entities = extractor().extract("Messi se retira del fútbol");
    assert_eq!(entities.persons, ["Lionel Messi"]);
}

#[test]
fn tagged_person_is_not_duplicated_by_alias() {
    let entities = extractor().extract("Lionel Messi firmó con el club");
    assert_eq!(entities.persons, ["Lionel Messi"]);
}

#[test]
fn alias_inside_a_longer_word_is_ignored() {
    let entities = extractor().extract("el trumpetista tocó toda la noche");
    assert!(entities.persons.is_empty());
}

#[test]
fn tagger_failure_still_recovers_alias_persons() {
    let extractor = EntityExtractor::with_tagger(kb(), Arc::new(FailingTagger));
    let entities = extractor.extract("Piñera murió ayer en Santiago");
    assert_eq!(entities.persons, ["Sebastián Piñera"]);
    assert!(entities.locations.is_empty());
    assert!(entities.has_event(EventType::Death));
}

// ─── Event detection ────────────────────────────────────────────────────────

#[test]
fn death_event_is_detected() {
    let entities = extractor().extract("Sebastián Piñera died yesterday");
    assert_eq!(entities.events.len(), 1);
    assert_eq!(entities.events[0].event_type, EventType::Death);
    assert_eq!(entities.events[0].keyword, "died");
}

#[test]
fn death_in_policy_context_is_vetoed() {
    let entities = extractor().extract("Milei propone la pena de muerte para violadores");
    assert!(!entities.has_event(EventType::Death));
}

#[test]
fn later_unvetoed_trigger_still_fires() {
    let text = "El gobierno propone la pena de muerte para violadores y delincuentes graves \
                en todo el país. Ayer también falleció el expresidente Sebastián Piñera";
    let entities = extractor().extract(text);
    let death: Vec<_> = entities
        .events
        .iter()
        .filter(|e| e.event_type == EventType::Death)
        .collect();
    assert_eq!(death.len(), 1);
    assert_eq!(death[0].keyword, "falleció");
}

#[test]
fn one_event_per_type() {
    let entities = extractor().extract("Un terremoto y un sismo sacuden Chile tras un incendio");
    let types: Vec<EventType> = entities.events.iter().map(|e| e.event_type).collect();
    assert_eq!(types, [EventType::Earthquake, EventType::Fire]);
    assert_eq!(entities.locations, ["Chile"]);
}

#[test]
fn extraction_is_deterministic() {
    let text = "Ayer Lula da Silva anunció su renuncia en Brasil";
    assert_eq!(extractor().extract(text), extractor().extract(text));
}

// ─── Claimed date recovery ──────────────────────────────────────────────────

#[test]
fn claimed_date_prefers_tagged_dates() {
    let extractor = extractor();
    let text = "Sebastián Piñera died on 2024-02-06";
    let entities = extractor.extract(text);
    assert_eq!(extractor.claimed_date(text, &entities).as_deref(), Some("2024-02-06"));
}

#[test]
fn claimed_date_falls_back_to_time_keyword_window() {
    let extractor = EntityExtractor::with_tagger(kb(), Arc::new(FailingTagger));
    let text = "Piñera murió ayer en Santiago de Chile";
    let entities = extractor.extract(text);
    assert_eq!(
        extractor.claimed_date(text, &entities).as_deref(),
        Some("murió ayer en santiago")
    );
}

#[test]
fn no_time_reference_means_no_claimed_date() {
    let extractor = extractor();
    let text = "Sebastián Piñera died";
    let entities = extractor.extract(text);
    assert_eq!(extractor.claimed_date(text, &entities), None);
}
