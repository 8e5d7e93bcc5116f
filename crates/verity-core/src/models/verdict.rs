use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Confidence;

/// Payload shared by every verdict variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictDetail {
    pub confidence: Confidence,
    pub explanation: String,
    /// Where the verdict came from ("knowledge base", "Wikipedia: <url>", ...).
    pub source_label: String,
    /// The recorded date of death when it contradicts the claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<NaiveDate>,
}

/// Outcome of an entity-level check, consumed by the fusion cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum VerificationVerdict {
    /// The claim contradicts known facts.
    Fake(VerdictDetail),
    /// The claim agrees with known facts.
    Real(VerdictDetail),
    /// The claim is sensitive and unattributed; neither true nor false.
    NeedsVerification(VerdictDetail),
    /// Nothing is known about the subject.
    Unverified(VerdictDetail),
}

impl VerificationVerdict {
    pub fn fake(confidence: f64, explanation: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Fake(detail(confidence, explanation, source))
    }

    pub fn real(confidence: f64, explanation: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Real(detail(confidence, explanation, source))
    }

    pub fn needs_verification(
        confidence: f64,
        explanation: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::NeedsVerification(detail(confidence, explanation, source))
    }

    pub fn unverified(
        confidence: f64,
        explanation: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::Unverified(detail(confidence, explanation, source))
    }

    /// Attach the recorded date of death.
    pub fn with_actual_date(mut self, date: NaiveDate) -> Self {
        self.detail_mut().actual_date = Some(date);
        self
    }

    pub fn detail(&self) -> &VerdictDetail {
        match self {
            Self::Fake(d) | Self::Real(d) | Self::NeedsVerification(d) | Self::Unverified(d) => d,
        }
    }

    fn detail_mut(&mut self) -> &mut VerdictDetail {
        match self {
            Self::Fake(d) | Self::Real(d) | Self::NeedsVerification(d) | Self::Unverified(d) => d,
        }
    }

    pub fn confidence(&self) -> Confidence {
        self.detail().confidence
    }

    pub fn explanation(&self) -> &str {
        &self.detail().explanation
    }

    /// `Some(true)` for Real, `Some(false)` for Fake, `None` otherwise.
    pub fn is_true(&self) -> Option<bool> {
        match self {
            Self::Real(_) => Some(true),
            Self::Fake(_) => Some(false),
            Self::NeedsVerification(_) | Self::Unverified(_) => None,
        }
    }

    /// Whether the verdict settles the claim either way.
    pub fn is_definitive(&self) -> bool {
        self.is_true().is_some()
    }
}

fn detail(confidence: f64, explanation: impl Into<String>, source: impl Into<String>) -> VerdictDetail {
    VerdictDetail {
        confidence: Confidence::new(confidence),
        explanation: explanation.into(),
        source_label: source.into(),
        actual_date: None,
    }
}
