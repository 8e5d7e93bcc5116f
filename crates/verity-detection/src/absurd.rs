//! Claims about known people that contradict what they are known to do.

use tracing::debug;
use verity_core::models::{ExtractedEntities, VerificationVerdict};
use verity_knowledge::KnowledgeBase;

const RETIREMENT_CONFIDENCE: f64 = 0.90;
const NEVER_DID_CONFIDENCE: f64 = 0.95;
const SOURCE: &str = "knowledge base";

/// Check every extracted person resolved to a canonical entity against two
/// rules, in order: an active professional "retiring", and an activity the
/// person is recorded as never having done. The first hit wins.
pub fn check_absurd(
    kb: &KnowledgeBase,
    text: &str,
    entities: &ExtractedEntities,
) -> Option<VerificationVerdict> {
    let lowered = text.to_lowercase();

    for person in &entities.persons {
        let Some(entity) = kb.resolve_person(person) else {
            continue;
        };
        let name = entity.display_name();

        if entity.is_professionally_active == Some(true) {
            if let Some(m) = kb.retirement().find_first(&lowered) {
                debug!(person = %name, keyword = %m.phrase, "retirement claim about an active professional");
                return Some(VerificationVerdict::fake(
                    RETIREMENT_CONFIDENCE,
                    format!("{name} is still professionally active; there is no official retirement announcement"),
                    SOURCE,
                ));
            }
        }

        for tag in &entity.never_did {
            let Some(activity) = kb.activity(tag) else {
                continue;
            };
            if let Some(m) = activity.keywords.find_first(&lowered) {
                debug!(person = %name, activity = %tag, keyword = %m.phrase, "claim of an activity never recorded");
                return Some(VerificationVerdict::fake(
                    NEVER_DID_CONFIDENCE,
                    format!(
                        "{name} has never announced {}; the claim has no verifiable source",
                        activity.description
                    ),
                    SOURCE,
                ));
            }
        }
    }

    None
}
