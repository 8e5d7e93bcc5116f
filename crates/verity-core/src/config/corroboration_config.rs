use serde::{Deserialize, Serialize};

use super::defaults;

/// Fact-check search (Google Fact Check Tools `claims:search`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactCheckConfig {
    pub endpoint: String,
    /// Overridden by `VERITY_FACT_CHECK_KEY`.
    pub api_key: Option<String>,
    pub language_code: String,
    pub timeout_secs: u64,
    /// Claim text is truncated to this many characters for the query.
    pub query_chars: usize,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_FACT_CHECK_URL.to_string(),
            api_key: None,
            language_code: defaults::DEFAULT_FACT_CHECK_LANGUAGE.to_string(),
            timeout_secs: defaults::DEFAULT_FACT_CHECK_TIMEOUT_SECS,
            query_chars: defaults::DEFAULT_FACT_CHECK_QUERY_CHARS,
        }
    }
}

/// Recent-news search (NewsAPI `/v2/everything`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub endpoint: String,
    /// Overridden by `VERITY_NEWS_KEY`.
    pub api_key: Option<String>,
    pub language: String,
    /// Only articles published within this many days are searched.
    pub days_back: i64,
    pub page_size: u32,
    pub timeout_secs: u64,
    /// Claim text is truncated to this many characters for the query.
    pub query_chars: usize,
    pub user_agent: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_NEWS_URL.to_string(),
            api_key: None,
            language: defaults::DEFAULT_NEWS_LANGUAGE.to_string(),
            days_back: defaults::DEFAULT_NEWS_DAYS_BACK,
            page_size: defaults::DEFAULT_NEWS_PAGE_SIZE,
            timeout_secs: defaults::DEFAULT_NEWS_TIMEOUT_SECS,
            query_chars: defaults::DEFAULT_NEWS_QUERY_CHARS,
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
        }
    }
}
