//! Hosted text-classification endpoint (Hugging Face inference API shape).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use verity_core::config::defaults::DEFAULT_USER_AGENT;
use verity_core::config::ClassifierConfig;
use verity_core::errors::CollaboratorError;
use verity_core::models::ClassLabel;
use verity_core::traits::TextClassifier;

use crate::http;

const NAME: &str = "inference_classifier";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Single-input responses arrive either flat or wrapped in one more list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Flat(Vec<ClassLabel>),
    Nested(Vec<Vec<ClassLabel>>),
}

impl InferenceResponse {
    fn into_labels(self) -> Vec<ClassLabel> {
        match self {
            Self::Flat(labels) => labels,
            Self::Nested(batches) => batches.into_iter().flatten().collect(),
        }
    }
}

/// [`TextClassifier`] calling a remote inference endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClassifier {
    client: Client,
    url: String,
    api_token: Option<String>,
    timeout: Duration,
}

impl InferenceClassifier {
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, CollaboratorError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        Ok(Self {
            client: http::build_client(NAME, DEFAULT_USER_AGENT, timeout)?,
            url: config.model_url(),
            api_token: config.api_token.clone(),
            timeout,
        })
    }
}

#[async_trait]
impl TextClassifier for InferenceClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<ClassLabel>, CollaboratorError> {
        let mut request = self.client.post(&self.url).json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| http::send_error(NAME, self.timeout, e))?;
        let body: InferenceResponse = http::read_json(NAME, self.timeout, response).await?;
        let labels = body.into_labels();
        if labels.is_empty() {
            return Err(CollaboratorError::Malformed {
                collaborator: NAME.to_string(),
                reason: "no labels in response".to_string(),
            });
        }
        debug!(labels = labels.len(), "classifier responded");
        Ok(labels)
    }

    fn name(&self) -> &str {
        NAME
    }
}
