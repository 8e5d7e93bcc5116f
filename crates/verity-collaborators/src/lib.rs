//! # verity-collaborators
//!
//! `reqwest`-backed implementations of the collaborator traits in
//! `verity_core::traits`. Each adapter is built from its config section, owns
//! a client with its own timeout and user agent, and reports every failure as
//! a [`CollaboratorError`](verity_core::CollaboratorError).

pub mod classifier;
pub mod fact_check;
mod http;
pub mod news;
pub mod registry;
pub mod wikipedia;

pub use classifier::InferenceClassifier;
pub use fact_check::GoogleFactCheck;
pub use news::NewsApiSearch;
pub use registry::HttpCollaborators;
pub use wikipedia::WikipediaLookup;
