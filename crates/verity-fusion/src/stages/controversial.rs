//! Controversial claims settled by news coverage, never by style.

use verity_core::config::FusionConfig;
use verity_core::models::{Label, NewsCorroboration, NewsVerdict, VerificationMethod, VerificationVerdict};

use super::StageVerdict;

/// Resolve a flagged claim. Without usable coverage it stays UNCERTAIN at the
/// unresolved band.
pub fn resolve(
    flag: &VerificationVerdict,
    news: Option<&NewsCorroboration>,
    config: &FusionConfig,
) -> StageVerdict {
    let method = VerificationMethod::ControversialClaim;
    let usable = news.filter(|n| n.found_articles() && n.relevant_count > 0);
    let verdict = match usable.map(|n| n.verdict) {
        Some(NewsVerdict::Strong) => StageVerdict::banded(method, Label::Real, config.controversial_strong),
        Some(NewsVerdict::Weak) => StageVerdict::banded(method, Label::Uncertain, config.controversial_weak),
        Some(NewsVerdict::NoneRelevant) | None => {
            return StageVerdict::banded(method, Label::Uncertain, config.controversial_unresolved)
                .with_explanation(flag.explanation());
        }
    };
    let relevant = usable.map_or(0, |n| n.relevant_count);
    verdict.with_explanation(format!(
        "{}; {relevant} relevant recent articles cover it",
        flag.explanation()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag() -> VerificationVerdict {
        VerificationVerdict::needs_verification(0.5, "unattributed political claim", "detector")
    }

    fn news(relevant_count: usize, verdict: NewsVerdict) -> NewsCorroboration {
        NewsCorroboration {
            total_results: 12,
            relevant_count,
            verdict,
            sources: vec!["La Tercera".into()],
        }
    }

    #[test]
    fn strong_coverage_is_real() {
        let out = resolve(&flag(), Some(&news(4, NewsVerdict::Strong)), &FusionConfig::default());
        assert_eq!(out.label, Label::Real);
        assert_eq!((out.score, out.confidence.value()), (0.70, 0.75));
        assert!(out.explanation.unwrap().contains("4 relevant"));
    }

    #[test]
    fn weak_coverage_stays_uncertain() {
        let out = resolve(&flag(), Some(&news(1, NewsVerdict::Weak)), &FusionConfig::default());
        assert_eq!(out.label, Label::Uncertain);
        assert_eq!((out.score, out.confidence.value()), (0.55, 0.60));
    }

    #[test]
    fn no_coverage_is_unresolved() {
        for coverage in [None, Some(NewsCorroboration::empty())] {
            let out = resolve(&flag(), coverage.as_ref(), &FusionConfig::default());
            assert_eq!(out.label, Label::Uncertain);
            assert_eq!((out.score, out.confidence.value()), (0.50, 0.50));
            assert_eq!(out.explanation.as_deref(), Some("unattributed political claim"));
        }
    }
}
