//! # verity-knowledge
//!
//! The immutable knowledge the cascade reasons with: canonical entities,
//! alias table, keyword lexicons and gazetteers, all loaded once from a TOML
//! seed. Also hosts date resolution and the death-claim verifier.

pub mod dates;
pub mod knowledge_base;
mod seed;
pub mod verifier;

pub use dates::DateResolver;
pub use knowledge_base::{Activity, Gazetteer, KnowledgeBase, Topic};
pub use verifier::{DeathCheck, KnowledgeVerifier};
