use proptest::prelude::*;
use verity_core::TextFeatures;
use verity_heuristics::analyzer::feature_score;
use verity_heuristics::TextAnalyzer;

fn features_strategy() -> impl Strategy<Value = TextFeatures> {
    (
        (0.0f64..20.0, 0.0f64..1.0, 0.0f64..20.0),
        (0usize..20, 0usize..10, 0usize..10, 0usize..10),
        (any::<bool>(), any::<bool>(), any::<bool>()),
    )
        .prop_map(|((excl, caps, question), (sens, click, unver, extra), (src, dates, nums))| {
            TextFeatures {
                exclamation_ratio: excl,
                caps_ratio: caps,
                question_ratio: question,
                sensational_words: sens,
                clickbait_patterns: click,
                unverifiable_claims: unver,
                extraordinary_claims: extra,
                has_sources: src,
                has_dates: dates,
                has_numbers: nums,
                feature_score: 0.0,
            }
        })
}

// ── Feature score bounds ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn analyzed_score_is_in_unit_interval(text in ".{0,300}") {
        let analyzer = TextAnalyzer::new().unwrap();
        let score = analyzer.analyze(&text).feature_score;
        prop_assert!((0.0..=1.0).contains(&score), "score {} for {:?}", score, text);
    }

    #[test]
    fn computed_score_is_in_unit_interval(features in features_strategy()) {
        let score = feature_score(&features);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}

// ── Monotonicity in sensational words ─────────────────────────────────────

proptest! {
    #[test]
    fn score_never_increases_with_sensational_words(
        features in features_strategy(),
        extra in 1usize..10,
    ) {
        let mut more = features;
        more.sensational_words += extra;
        prop_assert!(feature_score(&more) <= feature_score(&features));
    }

    #[test]
    fn appending_a_sensational_word_never_raises_the_score(
        base in "[a-z ]{0,120}",
    ) {
        let analyzer = TextAnalyzer::new().unwrap();
        let before = analyzer.analyze(&format!("{base} ."));
        let after = analyzer.analyze(&format!("{base} escándalo."));
        prop_assert!(after.sensational_words >= before.sensational_words);
        prop_assert!(after.feature_score <= before.feature_score);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn analysis_is_deterministic(text in ".{0,200}") {
        let analyzer = TextAnalyzer::new().unwrap();
        prop_assert_eq!(analyzer.analyze(&text), analyzer.analyze(&text));
    }
}
