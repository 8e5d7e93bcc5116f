//! Seams to the collaborators the cascade consults.
//!
//! Network collaborators are async and object-safe so the cascade can hold
//! them as `Arc<dyn Trait>`. Errors are `CollaboratorError`; the cascade turns
//! every one of them into "no result".

mod classifier;
mod clock;
mod corroboration;
mod knowledge_lookup;
mod tagger;

pub use classifier::TextClassifier;
pub use clock::{Clock, FixedClock, SystemClock};
pub use corroboration::{FactCheckSearch, NewsSearch};
pub use knowledge_lookup::KnowledgeLookup;
pub use tagger::EntityTagger;
