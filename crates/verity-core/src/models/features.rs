use serde::{Deserialize, Serialize};

/// Surface style features of a text and the derived credibility score.
///
/// `feature_score` is in [0, 1]; 0 reads as "probably fake", 1 as "probably legitimate".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextFeatures {
    /// `!` count per 100 characters.
    pub exclamation_ratio: f64,
    /// All-caps words (3+ letters) per word.
    pub caps_ratio: f64,
    /// `?` count per 100 characters.
    pub question_ratio: f64,
    pub sensational_words: usize,
    pub clickbait_patterns: usize,
    pub unverifiable_claims: usize,
    pub extraordinary_claims: usize,
    pub has_sources: bool,
    pub has_dates: bool,
    pub has_numbers: bool,
    pub feature_score: f64,
}

impl TextFeatures {
    /// Features of an empty text.
    pub fn neutral() -> Self {
        Self {
            exclamation_ratio: 0.0,
            caps_ratio: 0.0,
            question_ratio: 0.0,
            sensational_words: 0,
            clickbait_patterns: 0,
            unverifiable_claims: 0,
            extraordinary_claims: 0,
            has_sources: false,
            has_dates: false,
            has_numbers: false,
            feature_score: 0.5,
        }
    }
}

impl Default for TextFeatures {
    fn default() -> Self {
        Self::neutral()
    }
}
