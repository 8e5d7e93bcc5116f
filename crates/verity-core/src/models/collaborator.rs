//! Payloads exchanged with external collaborators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Confidence, Label};

/// A person found by the external knowledge lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Title of the matched record.
    pub name: String,
    pub is_alive: Option<bool>,
    pub death_date: Option<NaiveDate>,
    pub source_url: String,
}

/// A rated claim returned by a fact-check search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckClaim {
    pub text: String,
    /// Textual rating of the first review ("False", "Mostly true", ...).
    pub rating: String,
    #[serde(default)]
    pub claimant: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Qualitative strength of news coverage for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsVerdict {
    /// Three or more relevant articles.
    Strong,
    /// At least one relevant article.
    Weak,
    /// Coverage exists but none of it matches the claim.
    NoneRelevant,
}

/// Result of a recent-news search for a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsCorroboration {
    pub total_results: u64,
    pub relevant_count: usize,
    pub verdict: NewsVerdict,
    /// Distinct outlets of the relevant articles.
    #[serde(default)]
    pub sources: Vec<String>,
}

impl NewsCorroboration {
    /// An empty search result.
    pub fn empty() -> Self {
        Self {
            total_results: 0,
            relevant_count: 0,
            verdict: NewsVerdict::NoneRelevant,
            sources: Vec::new(),
        }
    }

    pub fn found_articles(&self) -> bool {
        self.total_results > 0
    }
}

/// One label/score pair from the statistical classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassLabel {
    pub label: String,
    pub score: f64,
}

impl ClassLabel {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Classifier output mapped onto the fake/real spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub score: f64,
    pub label: Label,
    pub confidence: Confidence,
}
