use serde::{Deserialize, Serialize};

use super::defaults;

/// A fixed `(score, confidence)` pair assigned by a cascade stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub score: f64,
    pub confidence: f64,
}

impl From<(f64, f64)> for ScoreBand {
    fn from((score, confidence): (f64, f64)) -> Self {
        Self { score, confidence }
    }
}

/// Constants of the verdict fusion cascade.
///
/// These are empirically chosen; they are kept overridable rather than derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// FAKE verdicts from entity stages score `confidence * fake_score_scale`.
    pub fake_score_scale: f64,
    /// REAL verdicts from entity stages score `real_score_base + confidence * real_score_scale`.
    pub real_score_base: f64,
    pub real_score_scale: f64,
    pub controversial_strong: ScoreBand,
    pub controversial_weak: ScoreBand,
    pub controversial_unresolved: ScoreBand,
    pub fact_check_fake: ScoreBand,
    pub fact_check_real: ScoreBand,
    pub fact_check_mixed: ScoreBand,
    pub news_strong: ScoreBand,
    pub news_weak: ScoreBand,
    pub news_none_relevant: ScoreBand,
    /// Weight of the classifier score in the statistical blend.
    pub classifier_weight: f64,
    /// Weight of the heuristic feature score in the statistical blend.
    pub feature_weight: f64,
    /// Blended scores strictly below this are FAKE.
    pub fake_threshold: f64,
    /// Blended scores strictly above this are REAL.
    pub real_threshold: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            fake_score_scale: defaults::DEFAULT_FAKE_SCORE_SCALE,
            real_score_base: defaults::DEFAULT_REAL_SCORE_BASE,
            real_score_scale: defaults::DEFAULT_REAL_SCORE_SCALE,
            controversial_strong: defaults::DEFAULT_CONTROVERSIAL_STRONG.into(),
            controversial_weak: defaults::DEFAULT_CONTROVERSIAL_WEAK.into(),
            controversial_unresolved: defaults::DEFAULT_CONTROVERSIAL_UNRESOLVED.into(),
            fact_check_fake: defaults::DEFAULT_FACT_CHECK_FAKE.into(),
            fact_check_real: defaults::DEFAULT_FACT_CHECK_REAL.into(),
            fact_check_mixed: defaults::DEFAULT_FACT_CHECK_MIXED.into(),
            news_strong: defaults::DEFAULT_NEWS_STRONG.into(),
            news_weak: defaults::DEFAULT_NEWS_WEAK.into(),
            news_none_relevant: defaults::DEFAULT_NEWS_NONE_RELEVANT.into(),
            classifier_weight: defaults::DEFAULT_CLASSIFIER_WEIGHT,
            feature_weight: defaults::DEFAULT_FEATURE_WEIGHT,
            fake_threshold: defaults::DEFAULT_FAKE_THRESHOLD,
            real_threshold: defaults::DEFAULT_REAL_THRESHOLD,
        }
    }
}
