//! NewsAPI `/v2/everything` search and relevance assessment.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Days;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use verity_core::config::NewsConfig;
use verity_core::errors::CollaboratorError;
use verity_core::models::{NewsCorroboration, NewsVerdict};
use verity_core::text::truncate_chars;
use verity_core::traits::{Clock, NewsSearch, SystemClock};

use crate::http;

const NAME: &str = "newsapi";

/// Leading claim words an article is compared against.
const CLAIM_KEYWORDS: usize = 5;
/// Keywords an article must contain to count as relevant.
const MIN_KEYWORD_HITS: usize = 2;
const STRONG_AT: usize = 3;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    total_results: u64,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source: Option<ArticleSource>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

/// [`NewsSearch`] backed by NewsAPI.
#[derive(Clone)]
pub struct NewsApiSearch {
    client: Client,
    config: NewsConfig,
    timeout: Duration,
    clock: Arc<dyn Clock>,
}

impl NewsApiSearch {
    pub fn from_config(config: &NewsConfig) -> Result<Self, CollaboratorError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        Ok(Self {
            client: http::build_client(NAME, &config.user_agent, timeout)?,
            config: config.clone(),
            timeout,
            clock: Arc::new(SystemClock),
        })
    }

    /// Use `clock` to compute the search window.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn query(&self, claim: &str, person_hint: Option<&str>) -> String {
        match person_hint {
            Some(person) => format!(
                "{person} {}",
                truncate_chars(claim, self.config.query_chars / 2)
            ),
            None => truncate_chars(claim, self.config.query_chars).to_string(),
        }
    }
}

impl std::fmt::Debug for NewsApiSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiSearch")
            .field("endpoint", &self.config.endpoint)
            .field("language", &self.config.language)
            .finish()
    }
}

#[async_trait]
impl NewsSearch for NewsApiSearch {
    async fn search_news(
        &self,
        claim: &str,
        person_hint: Option<&str>,
    ) -> Result<NewsCorroboration, CollaboratorError> {
        let Some(key) = self.config.api_key.as_deref() else {
            return Err(http::not_configured(NAME));
        };
        let today = self.clock.today();
        let from = today
            .checked_sub_days(Days::new(self.config.days_back.max(0) as u64))
            .unwrap_or(today);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("q", self.query(claim, person_hint)),
                ("language", self.config.language.clone()),
                ("from", from.format("%Y-%m-%d").to_string()),
                ("sortBy", "relevancy".to_string()),
                ("pageSize", self.config.page_size.to_string()),
                ("apiKey", key.to_string()),
            ])
            .send()
            .await
            .map_err(|e| http::send_error(NAME, self.timeout, e))?;
        let body: EverythingResponse = http::read_json(NAME, self.timeout, response).await?;

        if body.status != "ok" {
            return Err(CollaboratorError::Malformed {
                collaborator: NAME.to_string(),
                reason: body.message.unwrap_or_else(|| format!("status {}", body.status)),
            });
        }

        let corroboration = assess(claim, body.total_results, &body.articles);
        debug!(
            total = corroboration.total_results,
            relevant = corroboration.relevant_count,
            "news coverage assessed"
        );
        Ok(corroboration)
    }

    fn name(&self) -> &str {
        NAME
    }
}

/// Count articles whose title or description mentions at least two of the
/// claim's first five words.
fn assess(claim: &str, total_results: u64, articles: &[Article]) -> NewsCorroboration {
    if total_results == 0 {
        return NewsCorroboration::empty();
    }

    let lowered = claim.to_lowercase();
    let keywords: Vec<&str> = lowered.split_whitespace().take(CLAIM_KEYWORDS).collect();

    let mut relevant_count = 0;
    let mut sources: Vec<String> = Vec::new();
    for article in articles {
        let title = article.title.as_deref().unwrap_or_default().to_lowercase();
        let description = article.description.as_deref().unwrap_or_default().to_lowercase();
        let hits = keywords
            .iter()
            .filter(|k| title.contains(*k) || description.contains(*k))
            .count();
        if hits < MIN_KEYWORD_HITS {
            continue;
        }
        relevant_count += 1;
        let source = article
            .source
            .as_ref()
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| "unknown".to_string());
        if !sources.contains(&source) {
            sources.push(source);
        }
    }

    let verdict = if relevant_count >= STRONG_AT {
        NewsVerdict::Strong
    } else if relevant_count >= 1 {
        NewsVerdict::Weak
    } else {
        NewsVerdict::NoneRelevant
    };

    NewsCorroboration {
        total_results,
        relevant_count,
        verdict,
        sources,
    }
}
