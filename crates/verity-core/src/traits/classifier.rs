use async_trait::async_trait;

use crate::errors::CollaboratorError;
use crate::models::ClassLabel;

/// Pretrained text classifier returning scored labels.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<ClassLabel>, CollaboratorError>;

    fn name(&self) -> &str;
}
