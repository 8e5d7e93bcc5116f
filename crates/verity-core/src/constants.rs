//! Evidence-source labels recorded on `FusionResult::evidence_sources`.

pub const SOURCE_ENTITY_VERIFICATION: &str = "entity_verification";
pub const SOURCE_ABSURD_DETECTOR: &str = "absurd_claim_detector";
pub const SOURCE_CONTROVERSIAL_DETECTOR: &str = "controversial_claim_detector";
pub const SOURCE_KNOWLEDGE_BASE: &str = "knowledge_base";
pub const SOURCE_KNOWLEDGE_LOOKUP: &str = "knowledge_lookup";
pub const SOURCE_FACT_CHECK: &str = "fact_check";
pub const SOURCE_NEWS_SEARCH: &str = "news_search";
pub const SOURCE_CLASSIFIER: &str = "statistical_classifier";
pub const SOURCE_TEXT_HEURISTICS: &str = "text_heuristics";
