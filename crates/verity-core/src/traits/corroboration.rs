use async_trait::async_trait;

use crate::errors::CollaboratorError;
use crate::models::{FactCheckClaim, NewsCorroboration};

/// Search over published fact-checks.
#[async_trait]
pub trait FactCheckSearch: Send + Sync {
    /// Claims matching `claim`, most relevant first. Empty when nothing matched.
    async fn search_fact_checks(&self, claim: &str) -> Result<Vec<FactCheckClaim>, CollaboratorError>;

    fn name(&self) -> &str;
}

/// Search over recent news coverage.
#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Coverage for `claim`, optionally narrowed by a person name.
    async fn search_news(
        &self,
        claim: &str,
        person_hint: Option<&str>,
    ) -> Result<NewsCorroboration, CollaboratorError>;

    fn name(&self) -> &str;
}
