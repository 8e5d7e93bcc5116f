//! Unattributed claims on charged political topics.

use verity_core::models::{ExtractedEntities, VerificationVerdict};
use verity_knowledge::KnowledgeBase;

const CONFIDENCE: f64 = 0.50;
const SOURCE: &str = "controversial claim detector";

/// Flag a text that touches a controversial topic in a political context
/// without naming any source.
///
/// Political context is either an office keyword in the text or an extracted
/// person known to be a politician.
pub fn check_controversial(
    kb: &KnowledgeBase,
    text: &str,
    entities: &ExtractedEntities,
) -> Option<VerificationVerdict> {
    let lowered = text.to_lowercase();

    let topic = kb.topics().iter().find(|t| t.keywords.contains_any(&lowered))?;

    let political = kb.political_office().contains_any(&lowered)
        || entities.persons.iter().any(|p| kb.is_politician(p));
    if !political || kb.attribution().contains_any(&lowered) {
        return None;
    }

    Some(VerificationVerdict::needs_verification(
        CONFIDENCE,
        format!(
            "unattributed political claim about {}; it needs verification against official sources",
            topic.name
        ),
        SOURCE,
    ))
}
