use serde::{Deserialize, Serialize};

use super::defaults;

/// External knowledge lookup (Wikipedia search + Wikidata entity data).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeLookupConfig {
    pub enabled: bool,
    pub wikipedia_api_url: String,
    /// Entity data URL prefix; `{QID}.json` is appended.
    pub wikidata_entity_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for KnowledgeLookupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wikipedia_api_url: defaults::DEFAULT_WIKIPEDIA_API_URL.to_string(),
            wikidata_entity_url: defaults::DEFAULT_WIKIDATA_ENTITY_URL.to_string(),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: defaults::DEFAULT_LOOKUP_TIMEOUT_SECS,
        }
    }
}
