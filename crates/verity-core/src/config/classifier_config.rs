use serde::{Deserialize, Serialize};

use super::defaults;

/// Statistical classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Base URL of the inference endpoint; the model name is appended.
    pub endpoint: String,
    pub model: String,
    /// Optional bearer token. Overridden by `VERITY_CLASSIFIER_TOKEN`.
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    /// Input is truncated to this many characters before inference.
    pub max_chars: usize,
    /// A label must score strictly above this to be trusted.
    pub label_threshold: f64,
    /// Raw labels meaning "fake" (compared case-insensitively).
    pub negative_labels: Vec<String>,
    /// Raw labels meaning "real" (compared case-insensitively).
    pub positive_labels: Vec<String>,
    pub fake_score: f64,
    pub real_score: f64,
    pub uncertain_confidence: f64,
    pub neutral_score: f64,
    pub neutral_confidence: f64,
}

impl ClassifierConfig {
    /// Full URL of the configured model.
    pub fn model_url(&self) -> String {
        format!("{}{}", self.endpoint, self.model)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_CLASSIFIER_ENDPOINT.to_string(),
            model: defaults::DEFAULT_CLASSIFIER_MODEL.to_string(),
            api_token: None,
            timeout_secs: defaults::DEFAULT_CLASSIFIER_TIMEOUT_SECS,
            max_chars: defaults::DEFAULT_CLASSIFIER_MAX_CHARS,
            label_threshold: defaults::DEFAULT_CLASSIFIER_LABEL_THRESHOLD,
            negative_labels: vec!["NEGATIVE".into(), "TOXIC".into(), "FAKE".into(), "LABEL_0".into()],
            positive_labels: vec![
                "POSITIVE".into(),
                "NON_TOXIC".into(),
                "REAL".into(),
                "LABEL_1".into(),
            ],
            fake_score: defaults::DEFAULT_CLASSIFIER_FAKE_SCORE,
            real_score: defaults::DEFAULT_CLASSIFIER_REAL_SCORE,
            uncertain_confidence: defaults::DEFAULT_CLASSIFIER_UNCERTAIN_CONFIDENCE,
            neutral_score: defaults::DEFAULT_NEUTRAL_SCORE,
            neutral_confidence: defaults::DEFAULT_NEUTRAL_CONFIDENCE,
        }
    }
}
