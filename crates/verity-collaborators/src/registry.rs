//! Build every HTTP collaborator from one [`VerityConfig`].

use std::sync::Arc;

use verity_core::errors::VerityResult;
use verity_core::traits::{FactCheckSearch, KnowledgeLookup, NewsSearch, TextClassifier};
use verity_core::VerityConfig;

use crate::{GoogleFactCheck, InferenceClassifier, NewsApiSearch, WikipediaLookup};

/// The production collaborator set, as trait objects.
#[derive(Clone)]
pub struct HttpCollaborators {
    /// `None` when `[knowledge_lookup] enabled = false`.
    pub lookup: Option<Arc<dyn KnowledgeLookup>>,
    pub fact_check: Arc<dyn FactCheckSearch>,
    pub news: Arc<dyn NewsSearch>,
    pub classifier: Arc<dyn TextClassifier>,
}

impl HttpCollaborators {
    pub fn from_config(config: &VerityConfig) -> VerityResult<Self> {
        let lookup: Option<Arc<dyn KnowledgeLookup>> = if config.knowledge_lookup.enabled {
            Some(Arc::new(WikipediaLookup::from_config(&config.knowledge_lookup)?))
        } else {
            None
        };
        Ok(Self {
            lookup,
            fact_check: Arc::new(GoogleFactCheck::from_config(&config.fact_check)?),
            news: Arc::new(NewsApiSearch::from_config(&config.news)?),
            classifier: Arc::new(InferenceClassifier::from_config(&config.classifier)?),
        })
    }
}

impl std::fmt::Debug for HttpCollaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCollaborators")
            .field("lookup", &self.lookup.as_ref().map(|l| l.name().to_string()))
            .field("fact_check", &self.fact_check.name())
            .field("news", &self.news.name())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}
