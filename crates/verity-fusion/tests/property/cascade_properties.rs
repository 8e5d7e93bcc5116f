//! Property tests for the cascade: idempotence and result bounds.

use std::sync::Arc;

use proptest::prelude::*;
use test_fixtures::fixed_clock;
use test_fixtures::mocks::{FixedClassifier, ScriptedFactCheck, ScriptedNews};
use verity_core::models::{Label, NewsCorroboration, NewsVerdict, VerificationMethod};
use verity_core::VerityConfig;
use verity_fusion::FusionCascade;
use verity_knowledge::KnowledgeBase;

const FRAGMENTS: &[&str] = &[
    "Sebastián Piñera",
    "Lionel Messi",
    "Milei",
    "murió ayer",
    "died on 2024-02-06",
    "se retira del fútbol",
    "la pena de muerte",
    "según Reuters",
    "URGENTE!!!",
    "no vas a creer",
    "the central bank",
    "hace 3 días",
    "alpacas",
    "en Santiago",
    "?",
];

fn cascade() -> FusionCascade {
    let kb = Arc::new(KnowledgeBase::embedded().unwrap());
    FusionCascade::new(kb, &VerityConfig::default())
        .unwrap()
        .with_clock(fixed_clock(2024, 2, 7))
        .with_classifier(Arc::new(FixedClassifier::single("NEGATIVE", 0.91)))
        .with_fact_check(Arc::new(ScriptedFactCheck::new(Vec::new())))
        .with_news(Arc::new(ScriptedNews::new(NewsCorroboration {
            total_results: 3,
            relevant_count: 1,
            verdict: NewsVerdict::Weak,
            sources: vec!["Emol".into()],
        })))
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..6).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn verify_is_idempotent(text in text_strategy()) {
        let cascade = cascade();
        let rt = runtime();
        let first = rt.block_on(cascade.verify(&text));
        let second = rt.block_on(cascade.verify(&text));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn result_is_bounded(text in text_strategy()) {
        let result = runtime().block_on(cascade().verify(&text));
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert!((0.0..=1.0).contains(&result.confidence.value()));
        prop_assert!(!result.evidence_sources.is_empty());
    }

    #[test]
    fn statistical_label_tracks_score(text in "[a-z ]{0,80}") {
        let result = runtime().block_on(cascade().verify(&text));
        if result.method == VerificationMethod::StatisticalFallback {
            let expected = Label::from_score(result.score, 0.35, 0.65);
            prop_assert_eq!(result.label, expected);
        }
    }
}
