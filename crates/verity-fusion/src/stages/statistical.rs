//! Classifier score blended with the style heuristics.

use verity_core::config::FusionConfig;
use verity_core::models::{ClassifierOutput, Label, TextFeatures, VerificationMethod};

use super::StageVerdict;

/// Blend and re-bucket. The label tracks the blended score; confidence stays
/// the classifier's own.
pub fn blend(output: &ClassifierOutput, features: &TextFeatures, config: &FusionConfig) -> StageVerdict {
    let combined =
        config.classifier_weight * output.score + config.feature_weight * features.feature_score;
    let label = Label::from_score(combined, config.fake_threshold, config.real_threshold);
    StageVerdict::new(
        VerificationMethod::StatisticalFallback,
        label,
        combined,
        output.confidence.value(),
    )
    .with_explanation(verity_heuristics::explain(features))
}
