//! Golden cascade scenarios from `test-fixtures/golden/cascade`.

use std::sync::Arc;

use test_fixtures::mocks::{FixedClassifier, ScriptedFactCheck, ScriptedNews, StaticLookup};
use test_fixtures::{golden_cascade_cases, GoldenCase};
use verity_core::traits::FixedClock;
use verity_core::{FusionResult, VerityConfig};
use verity_fusion::FusionCascade;
use verity_knowledge::KnowledgeBase;

fn cascade_for(case: &GoldenCase, kb: &Arc<KnowledgeBase>) -> FusionCascade {
    let mut cascade = FusionCascade::new(Arc::clone(kb), &VerityConfig::default())
        .unwrap()
        .with_clock(Arc::new(FixedClock(case.today)));
    if !case.lookup.is_empty() {
        cascade = cascade.with_lookup(Arc::new(StaticLookup::with_records(case.lookup.clone())));
    }
    if !case.fact_checks.is_empty() {
        cascade = cascade.with_fact_check(Arc::new(ScriptedFactCheck::new(case.fact_checks.clone())));
    }
    if let Some(news) = &case.news {
        cascade = cascade.with_news(Arc::new(ScriptedNews::new(news.clone())));
    }
    if !case.classifier.is_empty() {
        cascade = cascade.with_classifier(Arc::new(FixedClassifier::new(case.classifier.clone())));
    }
    cascade
}

fn check(case: &GoldenCase, result: &FusionResult) -> Result<(), String> {
    let expected = &case.expected;
    if result.method.as_str() != expected.method {
        return Err(format!("method {} != {}", result.method, expected.method));
    }
    if result.label.as_str() != expected.label {
        return Err(format!("label {} != {}", result.label, expected.label));
    }
    if !(expected.score_min..=expected.score_max).contains(&result.score) {
        return Err(format!(
            "score {} outside [{}, {}]",
            result.score, expected.score_min, expected.score_max
        ));
    }
    if result.confidence.value() < expected.confidence_min {
        return Err(format!(
            "confidence {} below {}",
            result.confidence, expected.confidence_min
        ));
    }
    if !expected.evidence.is_empty() {
        let actual: Vec<&str> = result.evidence_sources.iter().map(String::as_str).collect();
        let mut wanted: Vec<&str> = expected.evidence.iter().map(String::as_str).collect();
        wanted.sort_unstable();
        if actual != wanted {
            return Err(format!("evidence {actual:?} != {wanted:?}"));
        }
    }
    if let Some(needle) = &expected.explanation_contains {
        let explanation = result.explanation.as_deref().unwrap_or_default();
        if !explanation.contains(needle.as_str()) {
            return Err(format!("explanation {explanation:?} lacks {needle:?}"));
        }
    }
    Ok(())
}

#[tokio::test]
async fn golden_cascade_cases_hold() {
    let kb = Arc::new(KnowledgeBase::embedded().unwrap());
    let cases = golden_cascade_cases();
    assert!(cases.len() >= 8, "expected the golden set, found {}", cases.len());

    let mut failures = Vec::new();
    for case in &cases {
        let result = cascade_for(case, &kb).verify(&case.text).await;
        if let Err(reason) = check(case, &result) {
            failures.push(format!("{}: {reason}", case.name));
        }
    }
    assert!(failures.is_empty(), "golden failures:\n{}", failures.join("\n"));
}
