use std::sync::Arc;

use verity_core::models::VerificationVerdict;
use verity_detection::{check_absurd, check_controversial};
use verity_extraction::EntityExtractor;
use verity_knowledge::KnowledgeBase;

fn setup() -> (Arc<KnowledgeBase>, EntityExtractor) {
    let kb = Arc::new(KnowledgeBase::embedded().unwrap());
    let extractor = EntityExtractor::new(Arc::clone(&kb));
    (kb, extractor)
}

fn absurd(text: &str) -> Option<VerificationVerdict> {
    let (kb, extractor) = setup();
    let entities = extractor.extract(text);
    check_absurd(&kb, text, &entities)
}

fn controversial(text: &str) -> Option<VerificationVerdict> {
    let (kb, extractor) = setup();
    let entities = extractor.extract(text);
    check_controversial(&kb, text, &entities)
}

// ─── Absurd claims ──────────────────────────────────────────────────────────

#[test]
fn active_player_retirement_is_fake() {
    let verdict = absurd("Lionel Messi retires from the sport").unwrap();
    assert!(matches!(verdict, VerificationVerdict::Fake(_)));
    assert_eq!(verdict.confidence().value(), 0.90);
    assert!(verdict.explanation().contains("Lionel Messi"));
}

#[test]
fn spanish_retirement_with_surname_only_is_fake() {
    let verdict = absurd("Messi se retira del fútbol profesional").unwrap();
    assert_eq!(verdict.is_true(), Some(false));
}

#[test]
fn never_did_activity_is_fake_and_named() {
    let verdict = absurd("Messi anuncia que dejará todo para criar alpacas en la Patagonia").unwrap();
    assert_eq!(verdict.confidence().value(), 0.95);
    assert!(verdict.explanation().contains("raising alpacas in Patagonia"));
}

#[test]
fn career_change_of_entity_without_that_record_is_not_absurd() {
    assert!(absurd("Lionel Messi anuncia una nueva carrera como entrenador").is_none());
}

#[test]
fn retirement_of_inactive_entity_is_not_absurd() {
    assert!(absurd("Gabriel Boric se retira de la política").is_none());
}

#[test]
fn unknown_person_is_not_absurd() {
    assert!(absurd("Juan Pérez se retira y cría alpacas").is_none());
}

#[test]
fn text_without_persons_is_not_absurd() {
    assert!(absurd("las alpacas son animales de la Patagonia").is_none());
}

// ─── Controversial claims ───────────────────────────────────────────────────

#[test]
fn unattributed_topic_with_politician_needs_verification() {
    let verdict = controversial("Milei quiere implementar la pena de muerte para violadores").unwrap();
    assert!(matches!(verdict, VerificationVerdict::NeedsVerification(_)));
    assert_eq!(verdict.confidence().value(), 0.50);
    assert!(verdict.explanation().contains("capital punishment"));
}

#[test]
fn office_keyword_is_enough_political_context() {
    let verdict = controversial("El gobierno declarará estado de sitio en todo el país").unwrap();
    assert!(verdict.explanation().contains("political violence"));
}

#[test]
fn attribution_suppresses_the_flag() {
    assert!(controversial("Según Reuters, el gobierno evalúa la pena de muerte").is_none());
    assert!(controversial("The president announced a death penalty bill").is_none());
}

#[test]
fn topic_without_political_context_is_ignored() {
    assert!(controversial("Debate universitario sobre la eutanasia").is_none());
}

#[test]
fn political_context_without_topic_is_ignored() {
    assert!(controversial("El presidente inauguró un hospital").is_none());
}
