use proptest::prelude::*;
use test_fixtures::{date, fixed_clock};
use verity_knowledge::dates::date_spans;
use verity_knowledge::DateResolver;

fn resolver() -> DateResolver {
    DateResolver::new(fixed_clock(2024, 2, 7))
}

fn unit_phrase() -> impl Strategy<Value = (String, u64)> {
    prop_oneof![
        Just(("days ago".to_string(), 1)),
        Just(("weeks ago".to_string(), 7)),
        Just(("months ago".to_string(), 30)),
    ]
}

// ── Totality ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn resolve_never_panics(text in ".{0,200}") {
        let _ = resolver().resolve(&text);
    }

    #[test]
    fn spans_are_ordered_and_disjoint(text in "[a-z0-9/ .-]{0,120}") {
        let spans = date_spans(&text);
        for (start, end) in &spans {
            prop_assert!(start < end && *end <= text.len());
        }
        for pair in spans.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0, "{:?} overlaps in {:?}", pair, text);
        }
    }
}

// ── Relative offsets ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn counted_offsets_never_pass_today(count in 0u64..2000, (unit, per_unit) in unit_phrase()) {
        let resolver = resolver();
        let today = resolver.today();
        let resolved = resolver.resolve(&format!("{count} {unit}"));
        prop_assert_eq!(resolved, today.checked_sub_days(chrono::Days::new(count * per_unit)));
        prop_assert!(resolved.is_some_and(|d| d <= today));
    }

    #[test]
    fn spanish_counted_offsets_match_english(count in 0u64..2000) {
        let resolver = resolver();
        prop_assert_eq!(
            resolver.resolve(&format!("hace {count} días")),
            resolver.resolve(&format!("{count} days ago"))
        );
    }

    #[test]
    fn fixed_phrases_land_within_a_month(
        phrase in prop::sample::select(vec![
            "hoy", "today", "ayer", "yesterday", "anteayer", "antes de ayer",
            "last week", "hace una semana", "a month ago", "hace un mes",
        ]),
    ) {
        let resolved = resolver().resolve(phrase);
        prop_assert!(resolved.is_some_and(|d| d <= date(2024, 2, 7) && d >= date(2024, 1, 8)));
    }
}
