//! Human-readable rendering of [`TextFeatures`].

use verity_core::TextFeatures;

const EXCLAMATION_WARN_ABOVE: f64 = 2.0;
const CAPS_WARN_ABOVE: f64 = 0.3;
const SENSATIONAL_WARN_ABOVE: usize = 3;
const UNVERIFIABLE_WARN_ABOVE: usize = 1;

/// Warnings for every style signal over its threshold, in a fixed order.
pub fn warnings(features: &TextFeatures) -> Vec<String> {
    let mut out = Vec::new();
    if features.sensational_words > SENSATIONAL_WARN_ABOVE {
        out.push("sensationalist language".to_string());
    }
    if features.clickbait_patterns > 0 {
        out.push("clickbait patterns".to_string());
    }
    if features.caps_ratio > CAPS_WARN_ABOVE {
        out.push("text written in capital letters".to_string());
    }
    if features.exclamation_ratio > EXCLAMATION_WARN_ABOVE {
        out.push("excessive exclamation marks".to_string());
    }
    if features.unverifiable_claims > UNVERIFIABLE_WARN_ABOVE {
        out.push("unverifiable claims".to_string());
    }
    if features.extraordinary_claims > 0 && !features.has_sources {
        out.push("extraordinary claims without sources".to_string());
    }
    out
}

fn positives(features: &TextFeatures) -> Vec<&'static str> {
    let mut out = Vec::new();
    if features.has_sources {
        out.push("mentions sources");
    }
    if features.has_dates {
        out.push("includes dates");
    }
    if features.has_numbers {
        out.push("includes figures");
    }
    out
}

/// One-paragraph summary of warning signs and positive aspects.
pub fn explain(features: &TextFeatures) -> String {
    let warnings = warnings(features);
    let positives = positives(features);

    if warnings.is_empty() && positives.is_empty() {
        return "Analysis based mainly on the statistical model.".to_string();
    }

    let mut parts = Vec::with_capacity(2);
    if !warnings.is_empty() {
        parts.push(format!("Warning signs: {}.", warnings.join(", ")));
    }
    if !positives.is_empty() {
        parts.push(format!("Positive aspects: {}.", positives.join(", ")));
    }
    parts.join(" ")
}
