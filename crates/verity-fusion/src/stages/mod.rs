//! Pure stage mappings: each turns the evidence one cascade stage gathered
//! into an optional [`StageVerdict`]. The cascade folds over them in order.

pub mod controversial;
pub mod corroboration;
pub mod entity;
pub mod statistical;

use verity_core::config::ScoreBand;
use verity_core::models::{Confidence, Label, VerificationMethod};

/// The verdict of the stage that resolved a claim.
#[derive(Debug, Clone, PartialEq)]
pub struct StageVerdict {
    pub method: VerificationMethod,
    pub label: Label,
    pub score: f64,
    pub confidence: Confidence,
    pub explanation: Option<String>,
}

impl StageVerdict {
    pub fn new(method: VerificationMethod, label: Label, score: f64, confidence: f64) -> Self {
        Self {
            method,
            label,
            score,
            confidence: Confidence::new(confidence),
            explanation: None,
        }
    }

    /// A verdict with a fixed score band.
    pub fn banded(method: VerificationMethod, label: Label, band: ScoreBand) -> Self {
        Self::new(method, label, band.score, band.confidence)
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Produced by one of the entity stages (absurd, controversial, knowledge).
    pub fn from_entity_stage(&self) -> bool {
        matches!(
            self.method,
            VerificationMethod::AbsurdClaim
                | VerificationMethod::ControversialClaim
                | VerificationMethod::KnowledgeVerified
        )
    }
}
