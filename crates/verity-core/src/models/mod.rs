//! Value types that flow through the cascade.

mod collaborator;
mod confidence;
mod entity;
mod extracted;
mod features;
mod fusion_result;
mod verdict;

pub use collaborator::{
    ClassLabel, ClassifierOutput, FactCheckClaim, NewsCorroboration, NewsVerdict, PersonRecord,
};
pub use confidence::Confidence;
pub use entity::{ActivityTag, CanonicalEntity};
pub use extracted::{DetectedEvent, EventType, ExtractedEntities, SpanKind, TaggedSpan};
pub use features::TextFeatures;
pub use fusion_result::{FusionResult, Label, VerificationMethod};
pub use verdict::{VerdictDetail, VerificationVerdict};
