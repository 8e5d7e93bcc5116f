use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Confidence, ExtractedEntities};

/// Final truthfulness label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Fake,
    Real,
    Uncertain,
}

impl Label {
    /// Bucket a score: strictly below `fake_below` is FAKE, strictly above
    /// `real_above` is REAL, anything else UNCERTAIN.
    pub fn from_score(score: f64, fake_below: f64, real_above: f64) -> Self {
        if score < fake_below {
            Self::Fake
        } else if score > real_above {
            Self::Real
        } else {
            Self::Uncertain
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fake => "FAKE",
            Self::Real => "REAL",
            Self::Uncertain => "UNCERTAIN",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The cascade stage that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    AbsurdClaim,
    ControversialClaim,
    KnowledgeVerified,
    FactCheck,
    NewsCorroboration,
    StatisticalFallback,
}

impl VerificationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AbsurdClaim => "absurd_claim",
            Self::ControversialClaim => "controversial_claim",
            Self::KnowledgeVerified => "knowledge_verified",
            Self::FactCheck => "fact_check",
            Self::NewsCorroboration => "news_corroboration",
            Self::StatisticalFallback => "statistical_fallback",
        }
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The answer returned by `verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    /// 0 = certainly false, 1 = certainly true.
    pub score: f64,
    pub label: Label,
    pub confidence: Confidence,
    pub method: VerificationMethod,
    /// Collaborators and detectors actually consulted for this call.
    pub evidence_sources: BTreeSet<String>,
    pub warnings: Vec<String>,
    /// Human-readable reason given by the stage that resolved the claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub entities: ExtractedEntities,
}
