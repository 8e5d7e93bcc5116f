//! External fact-checks and news coverage.

use verity_core::config::FusionConfig;
use verity_core::models::{FactCheckClaim, Label, NewsCorroboration, NewsVerdict, VerificationMethod};
use verity_knowledge::KnowledgeBase;

use super::StageVerdict;

/// Map the rating of the first rated claim. False terms win over true terms,
/// so "no es cierto" reads as false.
pub fn fact_check(
    claims: &[FactCheckClaim],
    kb: &KnowledgeBase,
    config: &FusionConfig,
) -> Option<StageVerdict> {
    let claim = claims.first()?;
    let rating = claim.rating.to_lowercase();
    let method = VerificationMethod::FactCheck;

    let verdict = if kb.fact_check_false().contains_any(&rating) {
        StageVerdict::banded(method, Label::Fake, config.fact_check_fake)
    } else if kb.fact_check_true().contains_any(&rating) {
        StageVerdict::banded(method, Label::Real, config.fact_check_real)
    } else {
        StageVerdict::banded(method, Label::Uncertain, config.fact_check_mixed)
    };

    let mut explanation = format!("fact-checkers rated a matching claim \"{}\"", claim.rating.trim());
    if let Some(publisher) = &claim.publisher {
        explanation.push_str(&format!(" ({publisher})"));
    }
    Some(verdict.with_explanation(explanation))
}

/// Map recent coverage. Applies only when the search found any article.
pub fn news(news: &NewsCorroboration, config: &FusionConfig) -> Option<StageVerdict> {
    if !news.found_articles() {
        return None;
    }
    let method = VerificationMethod::NewsCorroboration;
    let verdict = match news.verdict {
        NewsVerdict::Strong => StageVerdict::banded(method, Label::Real, config.news_strong),
        NewsVerdict::Weak => StageVerdict::banded(method, Label::Uncertain, config.news_weak),
        NewsVerdict::NoneRelevant => StageVerdict::banded(method, Label::Uncertain, config.news_none_relevant),
    };
    Some(verdict.with_explanation(format!(
        "{} of {} recent articles match the claim",
        news.relevant_count, news.total_results
    )))
}
