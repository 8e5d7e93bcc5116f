//! # verity-heuristics
//!
//! Pure, total text-style analysis. [`TextAnalyzer::analyze`] turns a text
//! into [`TextFeatures`](verity_core::TextFeatures) with a credibility score in
//! `[0, 1]`; [`warnings`] and [`explain`] render those features for humans.

pub mod analyzer;
pub mod patterns;
pub mod report;

pub use analyzer::TextAnalyzer;
pub use report::{explain, warnings};
