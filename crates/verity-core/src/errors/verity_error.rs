use super::CollaboratorError;

/// Top-level error for the Verity workspace.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("knowledge seed error: {reason}")]
    Seed { reason: String },

    #[error("lexicon '{name}' could not be built: {reason}")]
    Lexicon { name: String, reason: String },

    #[error("entity tagger failed: {reason}")]
    Tagger { reason: String },

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for VerityError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
