//! Statistical fallback: the remote classifier mapped onto the fake/real
//! spectrum.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use verity_core::config::ClassifierConfig;
use verity_core::models::{ClassLabel, ClassifierOutput, Confidence, Label};
use verity_core::text::truncate_chars;
use verity_core::traits::TextClassifier;

use crate::call;

/// Result of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub output: ClassifierOutput,
    /// Whether the classifier was actually called.
    pub consulted: bool,
}

/// Wraps an optional [`TextClassifier`]. Never fails: any problem yields the
/// configured neutral output.
#[derive(Clone)]
pub struct StatisticalScorer {
    classifier: Option<Arc<dyn TextClassifier>>,
    config: ClassifierConfig,
}

impl StatisticalScorer {
    /// A scorer with no classifier; every call is neutral.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: None,
            config,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn TextClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn neutral(&self) -> ClassifierOutput {
        ClassifierOutput {
            score: self.config.neutral_score,
            label: Label::Uncertain,
            confidence: Confidence::new(self.config.neutral_confidence),
        }
    }

    /// Classify the first `max_chars` characters of `text`. Blank text is
    /// neutral without a call.
    pub async fn score(&self, text: &str) -> Scored {
        let input = truncate_chars(text.trim(), self.config.max_chars);
        let Some(classifier) = self.classifier.as_ref().filter(|_| !input.is_empty()) else {
            return Scored {
                output: self.neutral(),
                consulted: false,
            };
        };

        let timeout = Duration::from_secs(self.config.timeout_secs);
        let output = match call::bounded(classifier.name(), timeout, classifier.classify(input)).await {
            Some(labels) => self.map_labels(&labels),
            None => self.neutral(),
        };
        Scored {
            output,
            consulted: true,
        }
    }

    /// Map raw labels to an output using the best-scoring label.
    pub fn map_labels(&self, labels: &[ClassLabel]) -> ClassifierOutput {
        let Some(best) = labels
            .iter()
            .filter(|l| l.score.is_finite())
            .max_by(|a, b| a.score.total_cmp(&b.score))
        else {
            return self.neutral();
        };

        let trusted = best.score > self.config.label_threshold;
        let is_in = |set: &[String]| set.iter().any(|l| l.eq_ignore_ascii_case(&best.label));

        let output = if trusted && is_in(&self.config.negative_labels) {
            ClassifierOutput {
                score: self.config.fake_score,
                label: Label::Fake,
                confidence: Confidence::new(best.score),
            }
        } else if trusted && is_in(&self.config.positive_labels) {
            ClassifierOutput {
                score: self.config.real_score,
                label: Label::Real,
                confidence: Confidence::new(best.score),
            }
        } else {
            ClassifierOutput {
                score: self.config.neutral_score,
                label: Label::Uncertain,
                confidence: Confidence::new(self.config.uncertain_confidence),
            }
        };
        debug!(label = %best.label, raw = best.score, mapped = %output.label, "classifier labels mapped");
        output
    }
}

impl std::fmt::Debug for StatisticalScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticalScorer")
            .field("classifier", &self.classifier.as_ref().map(|c| c.name().to_string()))
            .field("max_chars", &self.config.max_chars)
            .finish()
    }
}
