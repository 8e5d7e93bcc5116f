//! # verity-core
//!
//! Foundation crate for the Verity claim verification engine.
//! Defines the data model, collaborator traits, errors, config, and the
//! lexicon matcher shared by every stage of the cascade.

pub mod config;
pub mod constants;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerityConfig;
pub use errors::{CollaboratorError, VerityError, VerityResult};
pub use lexicon::{Lexicon, LexiconMatch};
pub use models::{
    Confidence, ExtractedEntities, FusionResult, Label, TextFeatures, VerificationMethod,
    VerificationVerdict,
};
