//! Absurd-claim and knowledge verdicts onto the score spectrum.

use verity_core::config::FusionConfig;
use verity_core::models::{Label, VerificationMethod, VerificationVerdict};

use super::StageVerdict;

/// Map a definitive entity verdict: FAKE lands in the low band scaled by
/// confidence, REAL in the high band. Anything else does not resolve.
pub fn resolve(
    method: VerificationMethod,
    verdict: &VerificationVerdict,
    config: &FusionConfig,
) -> Option<StageVerdict> {
    let confidence = verdict.confidence().value();
    let (label, score) = match verdict.is_true()? {
        false => (Label::Fake, confidence * config.fake_score_scale),
        true => (
            Label::Real,
            config.real_score_base + confidence * config.real_score_scale,
        ),
    };
    Some(StageVerdict::new(method, label, score, confidence).with_explanation(verdict.explanation()))
}
