use crate::errors::VerityResult;
use crate::models::TaggedSpan;

/// Named-entity tagger. Synchronous and local.
pub trait EntityTagger: Send + Sync {
    /// Tag persons, locations, organizations and dates in `text`.
    fn tag(&self, text: &str) -> VerityResult<Vec<TaggedSpan>>;
}
