//! Feature extraction and the credibility score.

use tracing::trace;
use verity_core::errors::VerityResult;
use verity_core::{Lexicon, TextFeatures};

use crate::patterns::{self, clickbait};

// ── Penalties: (weight per unit, cap) ─────────────────────────────────────
const EXCLAMATION_PENALTY: (f64, f64) = (0.1, 0.3);
const CAPS_PENALTY: (f64, f64) = (0.5, 0.3);
const QUESTION_PENALTY: (f64, f64) = (0.05, 0.1);
const SENSATIONAL_PENALTY: (f64, f64) = (0.05, 0.3);
const CLICKBAIT_PENALTY: (f64, f64) = (0.15, 0.3);
const UNVERIFIABLE_PENALTY: (f64, f64) = (0.08, 0.2);
/// Only applied when the text names no source.
const EXTRAORDINARY_PENALTY: (f64, f64) = (0.25, 0.5);

// ── Bonuses ───────────────────────────────────────────────────────────────
const SOURCES_BONUS: f64 = 0.15;
const DATES_BONUS: f64 = 0.05;
const NUMBERS_BONUS: f64 = 0.05;

/// Characters per punctuation-ratio unit.
const RATIO_WINDOW_CHARS: f64 = 100.0;

/// Scores writing style. Holds compiled word lists; cheap to share.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    sensational: Lexicon,
    unverifiable: Lexicon,
    extraordinary: Lexicon,
    sources: Lexicon,
}

impl TextAnalyzer {
    pub fn new() -> VerityResult<Self> {
        Ok(Self {
            sensational: Lexicon::new("sensational", patterns::SENSATIONAL_WORDS)?,
            unverifiable: Lexicon::new("unverifiable", patterns::UNVERIFIABLE_PHRASES)?,
            extraordinary: Lexicon::new("extraordinary", patterns::EXTRAORDINARY_WORDS)?,
            sources: Lexicon::new("source_indicators", patterns::SOURCE_INDICATORS)?,
        })
    }

    /// Extract style features. Total: the empty text yields
    /// [`TextFeatures::neutral`].
    pub fn analyze(&self, text: &str) -> TextFeatures {
        if text.is_empty() {
            return TextFeatures::neutral();
        }

        let lowered = text.to_lowercase();
        let char_units = (text.chars().count() as f64 / RATIO_WINDOW_CHARS).max(1.0);
        let word_count = text.split_whitespace().count().max(1) as f64;

        let mut features = TextFeatures {
            exclamation_ratio: text.matches('!').count() as f64 / char_units,
            caps_ratio: patterns::count_matches(&patterns::RE_CAPS_WORD, text) as f64 / word_count,
            question_ratio: text.matches('?').count() as f64 / char_units,
            sensational_words: self.sensational.count_distinct(&lowered),
            clickbait_patterns: clickbait::count(&lowered),
            unverifiable_claims: self.unverifiable.count_distinct(&lowered),
            extraordinary_claims: self.extraordinary.count_distinct(&lowered),
            has_sources: self.sources.contains_any(&lowered),
            has_dates: patterns::is_match(&patterns::RE_YEAR, text),
            has_numbers: patterns::is_match(&patterns::RE_NUMBER, text),
            feature_score: 0.0,
        };
        features.feature_score = feature_score(&features);
        trace!(score = features.feature_score, "text features computed");
        features
    }
}

/// Credibility score for the signal fields of `features`, ignoring its
/// current `feature_score`. Always in `[0, 1]`.
pub fn feature_score(features: &TextFeatures) -> f64 {
    let mut score = 1.0;

    score -= penalty(features.exclamation_ratio, EXCLAMATION_PENALTY);
    score -= penalty(features.caps_ratio, CAPS_PENALTY);
    score -= penalty(features.question_ratio, QUESTION_PENALTY);
    score -= penalty(features.sensational_words as f64, SENSATIONAL_PENALTY);
    score -= penalty(features.clickbait_patterns as f64, CLICKBAIT_PENALTY);
    score -= penalty(features.unverifiable_claims as f64, UNVERIFIABLE_PENALTY);
    if features.extraordinary_claims > 0 && !features.has_sources {
        score -= penalty(features.extraordinary_claims as f64, EXTRAORDINARY_PENALTY);
    }

    if features.has_sources {
        score += SOURCES_BONUS;
    }
    if features.has_dates {
        score += DATES_BONUS;
    }
    if features.has_numbers {
        score += NUMBERS_BONUS;
    }

    score.clamp(0.0, 1.0)
}

fn penalty(amount: f64, (weight, cap): (f64, f64)) -> f64 {
    (amount * weight).min(cap)
}
