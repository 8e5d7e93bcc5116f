//! Google Fact Check Tools `claims:search`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use verity_core::config::defaults::DEFAULT_USER_AGENT;
use verity_core::config::FactCheckConfig;
use verity_core::errors::CollaboratorError;
use verity_core::models::FactCheckClaim;
use verity_core::text::truncate_chars;
use verity_core::traits::FactCheckSearch;

use crate::http;

const NAME: &str = "google_fact_check";

#[derive(Debug, Deserialize)]
struct ClaimsResponse {
    #[serde(default)]
    claims: Vec<Claim>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claim {
    #[serde(default)]
    text: String,
    claimant: Option<String>,
    #[serde(default)]
    claim_review: Vec<ClaimReview>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimReview {
    publisher: Option<Publisher>,
    url: Option<String>,
    textual_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    name: Option<String>,
    site: Option<String>,
}

/// [`FactCheckSearch`] backed by the Google Fact Check Tools API.
#[derive(Debug, Clone)]
pub struct GoogleFactCheck {
    client: Client,
    config: FactCheckConfig,
    timeout: Duration,
}

impl GoogleFactCheck {
    pub fn from_config(config: &FactCheckConfig) -> Result<Self, CollaboratorError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        Ok(Self {
            client: http::build_client(NAME, DEFAULT_USER_AGENT, timeout)?,
            config: config.clone(),
            timeout,
        })
    }
}

#[async_trait]
impl FactCheckSearch for GoogleFactCheck {
    async fn search_fact_checks(&self, claim: &str) -> Result<Vec<FactCheckClaim>, CollaboratorError> {
        let Some(key) = self.config.api_key.as_deref() else {
            return Err(http::not_configured(NAME));
        };
        let query = truncate_chars(claim, self.config.query_chars);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("query", query),
                ("languageCode", self.config.language_code.as_str()),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| http::send_error(NAME, self.timeout, e))?;
        let body: ClaimsResponse = http::read_json(NAME, self.timeout, response).await?;

        let claims = rated_claims(body);
        debug!(count = claims.len(), "fact-check claims found");
        Ok(claims)
    }

    fn name(&self) -> &str {
        NAME
    }
}

/// Claims with a textual rating on their first review. Unrated claims are
/// dropped.
fn rated_claims(body: ClaimsResponse) -> Vec<FactCheckClaim> {
    body.claims
        .into_iter()
        .filter_map(|claim| {
            let review = claim.claim_review.into_iter().next()?;
            let rating = review.textual_rating.filter(|r| !r.trim().is_empty())?;
            Some(FactCheckClaim {
                text: claim.text,
                rating,
                claimant: claim.claimant,
                publisher: review.publisher.and_then(|p| p.name.or(p.site)),
                url: review.url,
            })
        })
        .collect()
}
