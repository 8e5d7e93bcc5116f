//! # verity-extraction
//!
//! Turns a claim text into persons, places, organizations, dates and events.
//! The tagger is pluggable; alias recovery and event detection always run
//! against the knowledge base.

pub mod extractor;
pub mod tagger;
mod tokens;

pub use extractor::EntityExtractor;
pub use tagger::RuleTagger;
