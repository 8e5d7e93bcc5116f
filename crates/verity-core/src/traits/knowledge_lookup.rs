use async_trait::async_trait;

use crate::errors::CollaboratorError;
use crate::models::PersonRecord;

/// External encyclopedia lookup for persons missing from the local table.
#[async_trait]
pub trait KnowledgeLookup: Send + Sync {
    /// Look up a person by name. `Ok(None)` means the lookup ran and found nothing.
    async fn lookup_person(&self, name: &str) -> Result<Option<PersonRecord>, CollaboratorError>;

    /// Short name used in logs and evidence sources.
    fn name(&self) -> &str;
}
