use std::sync::Arc;
use std::time::Duration;

use test_fixtures::mocks::{Failing, Slow, StaticLookup};
use test_fixtures::{date, fixed_clock};
use verity_core::constants::{SOURCE_KNOWLEDGE_BASE, SOURCE_KNOWLEDGE_LOOKUP};
use verity_core::models::{PersonRecord, VerificationVerdict};
use verity_knowledge::{DateResolver, KnowledgeBase, KnowledgeVerifier};

fn verifier_on(year: i32, month: u32, day: u32) -> KnowledgeVerifier {
    let kb = Arc::new(KnowledgeBase::embedded().unwrap());
    KnowledgeVerifier::new(kb, DateResolver::new(fixed_clock(year, month, day)))
}

fn verifier() -> KnowledgeVerifier {
    verifier_on(2024, 2, 7)
}

fn caszely_dead() -> PersonRecord {
    PersonRecord {
        name: "Carlos Caszely".into(),
        is_alive: Some(false),
        death_date: Some(date(2023, 5, 10)),
        source_url: "https://es.wikipedia.org/wiki/Carlos_Caszely".into(),
    }
}

fn with_lookup(lookup: StaticLookup) -> KnowledgeVerifier {
    verifier().with_lookup(Arc::new(lookup), Duration::from_secs(1))
}

// ─── Local table ────────────────────────────────────────────────────────────

#[tokio::test]
async fn exact_death_date_is_real() {
    let verdict = verifier().verify_death("Sebastián Piñera", Some("2024-02-06")).await;
    assert!(matches!(verdict, VerificationVerdict::Real(_)));
    assert_eq!(verdict.confidence().value(), 0.95);
    assert_eq!(verdict.detail().source_label, "Reuters, CNN, BBC");
}

#[tokio::test]
async fn wrong_death_date_is_fake_with_actual_date() {
    let verdict = verifier().verify_death("Piñera", Some("2024-01-15")).await;
    assert!(matches!(verdict, VerificationVerdict::Fake(_)));
    assert_eq!(verdict.confidence().value(), 0.95);
    assert!(verdict.explanation().contains("2024-02-06"));
    assert_eq!(verdict.detail().actual_date, Some(date(2024, 2, 6)));
}

#[tokio::test]
async fn yesterday_depends_on_the_evaluation_day() {
    let same_week = verifier().verify_death("Piñera", Some("yesterday")).await;
    assert_eq!(same_week.is_true(), Some(true));

    let a_year_later = verifier_on(2025, 3, 10).verify_death("Piñera", Some("yesterday")).await;
    assert_eq!(a_year_later.is_true(), Some(false));
    assert!(a_year_later.explanation().contains("2024-02-06"));
    assert!(a_year_later.explanation().contains("yesterday"));
}

#[tokio::test]
async fn relative_spanish_date_resolves() {
    let verdict = verifier_on(2024, 2, 9).verify_death("Piñera", Some("hace 3 días")).await;
    assert_eq!(verdict.is_true(), Some(true));
    assert_eq!(verdict.confidence().value(), 0.95);
}

#[tokio::test]
async fn missing_or_unparsable_date_is_date_agnostic() {
    let v = verifier();
    for claimed in [None, Some("el otro día"), Some("")] {
        let verdict = v.verify_death("Piñera", claimed).await;
        assert_eq!(verdict.is_true(), Some(true), "claimed {claimed:?}");
        assert_eq!(verdict.confidence().value(), 0.85);
    }
}

#[tokio::test]
async fn honorifics_are_stripped() {
    let verdict = verifier().verify_death("Expresidente Sebastián Piñera", Some("2024-02-06")).await;
    assert_eq!(verdict.is_true(), Some(true));
}

#[tokio::test]
async fn living_entity_is_fake() {
    let verdict = verifier().verify_death("Lionel Messi", None).await;
    assert!(matches!(verdict, VerificationVerdict::Fake(_)));
    assert_eq!(verdict.confidence().value(), 0.95);
    assert!(verdict.explanation().contains("alive"));
}

#[tokio::test]
async fn local_hit_never_calls_lookup() {
    let lookup = Arc::new(StaticLookup::new());
    let v = verifier().with_lookup(lookup.clone(), Duration::from_secs(1));
    let check = v.check_death("Boric", None).await;
    assert_eq!(check.consulted, vec![SOURCE_KNOWLEDGE_BASE]);
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn empty_name_without_lookup_is_unverified() {
    let verdict = verifier().verify_death("   ", None).await;
    assert!(matches!(verdict, VerificationVerdict::Unverified(_)));
    assert_eq!(verdict.confidence().value(), 0.3);
}

// ─── External lookup ────────────────────────────────────────────────────────

#[tokio::test]
async fn external_alive_is_fake() {
    let record = PersonRecord {
        is_alive: Some(true),
        death_date: None,
        ..caszely_dead()
    };
    let verdict = with_lookup(StaticLookup::with_records([record]))
        .verify_death("Carlos Caszely", None)
        .await;
    assert!(matches!(verdict, VerificationVerdict::Fake(_)));
    assert_eq!(verdict.confidence().value(), 0.90);
    assert!(verdict.detail().source_label.starts_with("static_lookup: "));
}

#[tokio::test]
async fn external_matching_date_is_real() {
    let verdict = with_lookup(StaticLookup::with_records([caszely_dead()]))
        .verify_death("Carlos Caszely", Some("2023-05-10"))
        .await;
    assert!(matches!(verdict, VerificationVerdict::Real(_)));
    assert_eq!(verdict.confidence().value(), 0.90);
}

#[tokio::test]
async fn external_mismatched_date_is_fake() {
    let verdict = with_lookup(StaticLookup::with_records([caszely_dead()]))
        .verify_death("Carlos Caszely", Some("yesterday"))
        .await;
    assert!(matches!(verdict, VerificationVerdict::Fake(_)));
    assert_eq!(verdict.confidence().value(), 0.95);
    assert_eq!(verdict.detail().actual_date, Some(date(2023, 5, 10)));
}

#[tokio::test]
async fn external_without_claim_is_date_agnostic() {
    let verdict = with_lookup(StaticLookup::with_records([caszely_dead()]))
        .verify_death("Carlos Caszely", None)
        .await;
    assert_eq!(verdict.is_true(), Some(true));
    assert_eq!(verdict.confidence().value(), 0.85);
}

#[tokio::test]
async fn external_dead_without_date_is_unverified() {
    let record = PersonRecord {
        death_date: None,
        ..caszely_dead()
    };
    let verdict = with_lookup(StaticLookup::with_records([record]))
        .verify_death("Carlos Caszely", Some("yesterday"))
        .await;
    assert!(matches!(verdict, VerificationVerdict::Unverified(_)));
}

#[tokio::test]
async fn external_miss_is_unverified_and_reports_consulted() {
    let lookup = Arc::new(StaticLookup::new());
    let v = verifier().with_lookup(lookup.clone(), Duration::from_secs(1));
    let check = v.check_death("Carlos Caszely", None).await;
    assert!(matches!(check.verdict, VerificationVerdict::Unverified(_)));
    assert_eq!(check.verdict.confidence().value(), 0.3);
    assert_eq!(check.consulted, vec![SOURCE_KNOWLEDGE_BASE, SOURCE_KNOWLEDGE_LOOKUP]);
    assert_eq!(lookup.calls(), 1);
}

#[tokio::test]
async fn failing_lookup_is_unverified() {
    let v = verifier().with_lookup(Arc::new(Failing::transport()), Duration::from_secs(1));
    let verdict = v.verify_death("Carlos Caszely", None).await;
    assert!(matches!(verdict, VerificationVerdict::Unverified(_)));
    assert_eq!(verdict.confidence().value(), 0.3);
}

#[tokio::test]
async fn slow_lookup_times_out_as_unverified() {
    let slow = Slow::new(
        StaticLookup::with_records([caszely_dead()]),
        Duration::from_millis(500),
    );
    let v = verifier().with_lookup(Arc::new(slow), Duration::from_millis(20));
    let verdict = v.verify_death("Carlos Caszely", None).await;
    assert!(matches!(verdict, VerificationVerdict::Unverified(_)));
}
